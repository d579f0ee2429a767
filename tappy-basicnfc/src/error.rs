// tappy-basicnfc/src/error.rs

use thiserror::Error;

use crate::types::FamilyCode;

/// Errors raised by the basic NFC codec and resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Payload shorter than the layout requires.
    #[error("payload too short: expected at least {expected} bytes, got {actual}")]
    PayloadTooShort {
        /// Minimum length for the layout.
        expected: usize,
        /// Length actually received.
        actual: usize,
    },

    /// Raised only where an untyped buffer is turned into a message envelope.
    #[error("not a basic nfc message: {0}")]
    NotAMessage(String),

    /// Envelope belongs to another command family.
    #[error("unsupported command family: {actual}")]
    UnsupportedFamily {
        /// Family the envelope carried.
        actual: FamilyCode,
    },

    /// Field does not fit its one-byte length prefix.
    #[error("{field} too long: maximum {max} bytes, got {actual}")]
    FieldTooLong {
        /// Name of the field.
        field: &'static str,
        /// Largest encodable length.
        max: usize,
        /// Length of the value.
        actual: usize,
    },

    /// Text field is not valid UTF-8.
    #[error("invalid utf-8 in {field}")]
    InvalidUtf8 {
        /// Name of the field.
        field: &'static str,
    },

    /// Byte is not a member of the named registry.
    #[error("unknown {registry} code: {code:#04x}")]
    UnknownCode {
        /// Registry that was consulted.
        registry: &'static str,
        /// Offending byte.
        code: u8,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
