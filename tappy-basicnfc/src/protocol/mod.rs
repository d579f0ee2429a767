// tappy-basicnfc/src/protocol/mod.rs

/// Host to reader commands.
pub mod commands;
/// Family/code/payload envelopes.
pub mod envelope;
/// The per-type codec contract.
pub mod message;
/// Decode options.
pub mod options;
/// Bounds-checked payload readers.
pub mod parser;
/// Envelope to typed message resolution.
pub mod resolver;
/// Reader to host responses.
pub mod responses;

pub use commands::*;
pub use envelope::{Envelope, RawMessage};
pub use message::Message;
pub use options::{DecodeOptions, ErrorTextEncoding, TruncatedIdPolicy};
pub use resolver::{Resolver, ResolverBuilder};
pub use responses::*;
