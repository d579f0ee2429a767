// tappy-basicnfc/src/lib.rs

//! tappy-basicnfc
//!
//! Payload codec and resolver for the basic NFC command family
//! (family `0x00 0x01`) spoken by Tappy NFC readers.
//!
//! Commands and responses implement [`protocol::Message`]; the
//! [`protocol::Resolver`] turns a framed `(family, code, payload)` envelope
//! into a typed [`Command`] or [`Response`]. Transport and outer framing are
//! left to the caller.
#![warn(missing_docs)]

/// Wire constants.
pub mod constants;
/// Error type and `Result` alias.
pub mod error;
/// Common imports.
pub mod prelude;
/// Message types, envelopes and the resolver.
pub mod protocol;
/// Helpers shared by tests.
pub mod test_support;
/// Family identifier and code registries.
pub mod types;
/// Hex helpers.
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the registries in `types` are available to consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
