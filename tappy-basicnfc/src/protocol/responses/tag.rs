// tappy-basicnfc/src/protocol/responses/tag.rs

use crate::constants::DEFAULT_TAG_CODE_LEN;
use crate::protocol::message::Message;
use crate::protocol::options::DecodeOptions;
use crate::protocol::parser;
use crate::types::ResponseCode;
use crate::utils::bytes_to_hex;
use crate::Result;

/// Tag event carrying the tag type and its UID.
/// Layout: tag_type(1) + tag_code(rest of payload)
///
/// Shared by `TagFound` and `TagWritten`, which differ only in their code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagEvent<const C: u8> {
    /// Detected tag technology.
    pub tag_type: u8,
    /// Tag UID.
    pub tag_code: Vec<u8>,
}

/// A tag entered the field during a scan or stream.
pub type TagFound = TagEvent<{ ResponseCode::TagFound as u8 }>;
/// A write command completed on the presented tag.
pub type TagWritten = TagEvent<{ ResponseCode::TagWritten as u8 }>;

impl<const C: u8> TagEvent<C> {
    /// Build from field values.
    pub fn new(tag_code: impl Into<Vec<u8>>, tag_type: u8) -> Self {
        Self {
            tag_type,
            tag_code: tag_code.into(),
        }
    }

    /// UID as lowercase hex, e.g. `"04a21f7b"`.
    pub fn tag_code_hex(&self) -> String {
        bytes_to_hex(&self.tag_code)
    }
}

impl<const C: u8> Default for TagEvent<C> {
    fn default() -> Self {
        Self::new(vec![0u8; DEFAULT_TAG_CODE_LEN], 0x00)
    }
}

impl<const C: u8> Message for TagEvent<C> {
    const CODE: u8 = C;

    fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(1 + self.tag_code.len());
        buf.push(self.tag_type);
        buf.extend_from_slice(&self.tag_code);
        Ok(buf)
    }

    fn decode_with(&mut self, payload: &[u8], _options: &DecodeOptions) -> Result<()> {
        self.tag_type = parser::byte_at(payload, 0)?;
        self.tag_code = parser::remainder(payload, 1).to_vec();
        Ok(())
    }
}
