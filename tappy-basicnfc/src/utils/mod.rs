//! Small helpers shared across the crate.
//!
//! Hex formatting is used for log output and for presenting tag codes.

/// Hex formatting and parsing.
pub mod hex;

pub use hex::*;
