// tappy-basicnfc/src/protocol/responses/application_error.rs

use crate::constants::APPLICATION_ERROR_HEADER_LEN;
use crate::protocol::message::Message;
use crate::protocol::options::DecodeOptions;
use crate::protocol::parser;
use crate::types::{ApplicationErrorCode, ResponseCode};
use crate::Result;

/// The reader rejected or failed a command.
/// Layout: error_code(1) + internal_error_code(1) + reader_status(1) + message(rest of payload)
///
/// `message` is encoded as UTF-8. How it is decoded depends on
/// `DecodeOptions::error_text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplicationError {
    /// See [`ApplicationErrorCode`].
    pub error_code: u8,
    /// Firmware-specific detail code.
    pub internal_error_code: u8,
    /// Status reported by the NFC controller.
    pub reader_status: u8,
    /// Free-text description.
    pub message: String,
}

impl ApplicationError {
    /// Build from field values.
    pub fn new(
        error_code: u8,
        internal_error_code: u8,
        reader_status: u8,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error_code,
            internal_error_code,
            reader_status,
            message: message.into(),
        }
    }

    /// `error_code` as a known application error, if it is one.
    pub fn kind(&self) -> Option<ApplicationErrorCode> {
        ApplicationErrorCode::try_from(self.error_code).ok()
    }
}

impl std::fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "{}", kind)?,
            None => write!(f, "error {:#04x}", self.error_code)?,
        }
        write!(
            f,
            " (internal={:#04x}, status={:#04x})",
            self.internal_error_code, self.reader_status
        )?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl Message for ApplicationError {
    const CODE: u8 = ResponseCode::ApplicationError as u8;

    fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(APPLICATION_ERROR_HEADER_LEN + self.message.len());
        buf.push(self.error_code);
        buf.push(self.internal_error_code);
        buf.push(self.reader_status);
        buf.extend_from_slice(self.message.as_bytes());
        Ok(buf)
    }

    fn decode_with(&mut self, payload: &[u8], options: &DecodeOptions) -> Result<()> {
        parser::ensure_len(payload, APPLICATION_ERROR_HEADER_LEN)?;
        self.error_code = payload[0];
        self.internal_error_code = payload[1];
        self.reader_status = payload[2];
        self.message = options.error_text_at(payload, APPLICATION_ERROR_HEADER_LEN)?;
        Ok(())
    }
}
