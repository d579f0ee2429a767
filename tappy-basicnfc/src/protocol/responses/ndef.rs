// tappy-basicnfc/src/protocol/responses/ndef.rs

use crate::constants::{DEFAULT_TAG_CODE_LEN, PREFIXED_ID_HEADER_LEN};
use crate::protocol::message::Message;
use crate::protocol::options::DecodeOptions;
use crate::protocol::parser;
use crate::types::ResponseCode;
use crate::utils::bytes_to_hex;
use crate::Result;

/// An NDEF message was read from a tag.
/// Layout: tag_type(1) + tag_code_len(1) + tag_code(len) + message(rest of payload)
///
/// `message` is the raw NDEF message; this crate does not parse records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdefFound {
    /// Detected tag technology.
    pub tag_type: u8,
    /// Tag UID.
    pub tag_code: Vec<u8>,
    /// Raw NDEF message.
    pub message: Vec<u8>,
}

impl NdefFound {
    /// Build from field values.
    pub fn new(tag_code: impl Into<Vec<u8>>, tag_type: u8, message: impl Into<Vec<u8>>) -> Self {
        Self {
            tag_type,
            tag_code: tag_code.into(),
            message: message.into(),
        }
    }

    /// UID as lowercase hex.
    pub fn tag_code_hex(&self) -> String {
        bytes_to_hex(&self.tag_code)
    }
}

impl Default for NdefFound {
    fn default() -> Self {
        Self::new(vec![0u8; DEFAULT_TAG_CODE_LEN], 0x00, Vec::new())
    }
}

impl Message for NdefFound {
    const CODE: u8 = ResponseCode::NdefFound as u8;

    fn encode(&self) -> Result<Vec<u8>> {
        let len = parser::length_prefix("tag code", &self.tag_code)?;
        let mut buf = Vec::with_capacity(
            PREFIXED_ID_HEADER_LEN + self.tag_code.len() + self.message.len(),
        );
        buf.push(self.tag_type);
        buf.push(len);
        buf.extend_from_slice(&self.tag_code);
        buf.extend_from_slice(&self.message);
        Ok(buf)
    }

    /// A tag code length running past the payload end is clipped to what
    /// is present, leaving `message` empty.
    fn decode_with(&mut self, payload: &[u8], _options: &DecodeOptions) -> Result<()> {
        parser::ensure_len(payload, PREFIXED_ID_HEADER_LEN)?;
        self.tag_type = payload[0];

        let code_end = (PREFIXED_ID_HEADER_LEN + payload[1] as usize).min(payload.len());
        self.tag_code = payload[PREFIXED_ID_HEADER_LEN..code_end].to_vec();
        self.message = parser::remainder(payload, code_end).to_vec();
        Ok(())
    }
}
