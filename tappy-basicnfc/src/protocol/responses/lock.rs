// tappy-basicnfc/src/protocol/responses/lock.rs

use crate::constants::PREFIXED_ID_HEADER_LEN;
use crate::protocol::message::Message;
use crate::protocol::options::DecodeOptions;
use crate::protocol::parser;
use crate::types::ResponseCode;
use crate::utils::bytes_to_hex;
use crate::Result;

/// The presented tag was locked.
/// Layout: tag_type(1) + id_len(1) + tag_code(id_len)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagLocked {
    /// Detected tag technology.
    pub tag_type: u8,
    /// Tag UID.
    pub tag_code: Vec<u8>,
}

impl TagLocked {
    /// Build from field values.
    pub fn new(tag_code: impl Into<Vec<u8>>, tag_type: u8) -> Self {
        Self {
            tag_type,
            tag_code: tag_code.into(),
        }
    }

    /// UID as lowercase hex.
    pub fn tag_code_hex(&self) -> String {
        bytes_to_hex(&self.tag_code)
    }
}

impl Message for TagLocked {
    const CODE: u8 = ResponseCode::TagLocked as u8;

    fn encode(&self) -> Result<Vec<u8>> {
        let len = parser::length_prefix("tag code", &self.tag_code)?;
        let mut buf = Vec::with_capacity(PREFIXED_ID_HEADER_LEN + self.tag_code.len());
        buf.push(self.tag_type);
        buf.push(len);
        buf.extend_from_slice(&self.tag_code);
        Ok(buf)
    }

    fn decode_with(&mut self, payload: &[u8], options: &DecodeOptions) -> Result<()> {
        parser::ensure_len(payload, PREFIXED_ID_HEADER_LEN)?;
        self.tag_type = payload[0];
        self.tag_code = options.prefixed_id(payload, 1, "tag code")?;
        Ok(())
    }
}
