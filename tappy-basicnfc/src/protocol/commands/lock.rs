// tappy-basicnfc/src/protocol/commands/lock.rs

use crate::constants::PREFIXED_ID_HEADER_LEN;
use crate::protocol::message::Message;
use crate::protocol::options::DecodeOptions;
use crate::protocol::parser;
use crate::types::CommandCode;
use crate::Result;

/// Lock the next tag presented, optionally only the tag with `tag_id`.
/// Layout: timeout(1) + id_len(1) + tag_id(id_len)
///
/// An empty `tag_id` locks whichever tag is presented first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockTag {
    /// Seconds to wait for a tag; 0 waits indefinitely.
    pub timeout: u8,
    /// UID of the tag to lock, or empty for any tag.
    pub tag_id: Vec<u8>,
}

impl LockTag {
    /// Lock the tag matching `tag_id`, or any tag when it is empty.
    pub fn new(timeout: u8, tag_id: impl Into<Vec<u8>>) -> Self {
        Self {
            timeout,
            tag_id: tag_id.into(),
        }
    }
}

impl Message for LockTag {
    const CODE: u8 = CommandCode::LockTag as u8;

    /// Fails with `FieldTooLong` when `tag_id` does not fit the one-byte
    /// length prefix.
    fn encode(&self) -> Result<Vec<u8>> {
        let len = parser::length_prefix("tag id", &self.tag_id)?;
        let mut buf = Vec::with_capacity(PREFIXED_ID_HEADER_LEN + self.tag_id.len());
        buf.push(self.timeout);
        buf.push(len);
        buf.extend_from_slice(&self.tag_id);
        Ok(buf)
    }

    fn decode_with(&mut self, payload: &[u8], options: &DecodeOptions) -> Result<()> {
        parser::ensure_len(payload, PREFIXED_ID_HEADER_LEN)?;
        self.timeout = payload[0];
        self.tag_id = options.prefixed_id(payload, 1, "tag id")?;
        Ok(())
    }
}
