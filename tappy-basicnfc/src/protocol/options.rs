// tappy-basicnfc/src/protocol/options.rs

//! Decode-time configuration.
//!
//! Two wire quirks of older hosts are selectable here: how a length-prefixed
//! tag id that runs past the payload end is handled, and how the free-text
//! tail of an `ApplicationError` is turned into a string.

use log::warn;

use crate::protocol::parser;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// What to do when a length-prefixed tag id (`LockTag`, `TagLocked`)
/// announces more bytes than the payload carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TruncatedIdPolicy {
    /// Fail the decode with `PayloadTooShort`.
    #[default]
    Reject,
    /// Leave the id empty and keep decoding.
    Ignore,
}

/// Character decoding applied to the `ApplicationError` message tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorTextEncoding {
    /// Strict UTF-8; invalid bytes fail the decode.
    #[default]
    Utf8,
    /// One character per byte. Never fails, but multi-byte UTF-8 text comes
    /// out as mojibake.
    Latin1,
}

/// Options threaded through every `decode_with` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeOptions {
    /// Handling of length-prefixed ids that run past the payload.
    pub truncated_id: TruncatedIdPolicy,
    /// Decoding of `ApplicationError` text.
    pub error_text: ErrorTextEncoding,
}

impl DecodeOptions {
    /// Strict defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lenient options for hosts that emit malformed payloads: truncated
    /// ids are dropped and error text is read byte-per-character.
    ///
    /// This is this crate's lenient mode, not byte-for-byte parity with any
    /// older host library.
    pub fn legacy() -> Self {
        Self {
            truncated_id: TruncatedIdPolicy::Ignore,
            error_text: ErrorTextEncoding::Latin1,
        }
    }

    /// Set the truncated-id policy.
    pub fn truncated_id(mut self, policy: TruncatedIdPolicy) -> Self {
        self.truncated_id = policy;
        self
    }

    /// Set the error text encoding.
    pub fn error_text(mut self, encoding: ErrorTextEncoding) -> Self {
        self.error_text = encoding;
        self
    }

    /// Read the `[len, id...]` block whose length byte sits at `len_idx`.
    pub(crate) fn prefixed_id(
        &self,
        data: &[u8],
        len_idx: usize,
        field: &'static str,
    ) -> Result<Vec<u8>> {
        let len = parser::byte_at(data, len_idx)? as usize;
        if len == 0 {
            return Ok(Vec::new());
        }

        let start = len_idx + 1;
        match parser::slice_at(data, start, len) {
            Ok(id) => Ok(id.to_vec()),
            Err(err @ Error::PayloadTooShort { .. }) => match self.truncated_id {
                TruncatedIdPolicy::Reject => Err(err),
                TruncatedIdPolicy::Ignore => {
                    warn!(
                        "{} announces {} bytes but only {} remain; leaving it empty [{}]",
                        field,
                        len,
                        data.len().saturating_sub(start),
                        bytes_to_hex_spaced(data)
                    );
                    Ok(Vec::new())
                }
            },
            Err(other) => Err(other),
        }
    }

    /// Decode an `ApplicationError` message tail starting at `idx`.
    pub(crate) fn error_text_at(&self, data: &[u8], idx: usize) -> Result<String> {
        match self.error_text {
            ErrorTextEncoding::Utf8 => parser::utf8_remainder(data, idx, "error message"),
            ErrorTextEncoding::Latin1 => Ok(parser::latin1_remainder(data, idx)),
        }
    }
}
