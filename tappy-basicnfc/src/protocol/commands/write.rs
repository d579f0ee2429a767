// tappy-basicnfc/src/protocol/commands/write.rs

use crate::constants::{LOCK_FLAG_CLEAR, LOCK_FLAG_SET, WRITE_HEADER_LEN, WRITE_URI_HEADER_LEN};
use crate::protocol::message::Message;
use crate::protocol::options::DecodeOptions;
use crate::protocol::parser;
use crate::types::CommandCode;
use crate::Result;

fn lock_flag(lock: bool) -> u8 {
    if lock { LOCK_FLAG_SET } else { LOCK_FLAG_CLEAR }
}

/// Build `[timeout, lock_flag]` followed by room for `extra` bytes.
fn write_header(timeout: u8, lock: bool, extra: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(WRITE_HEADER_LEN + extra);
    buf.push(timeout);
    buf.push(lock_flag(lock));
    buf
}

/// Read `(timeout, lock)` after checking the payload holds at least `min`
/// bytes.
fn read_header(payload: &[u8], min: usize) -> Result<(u8, bool)> {
    parser::ensure_len(payload, min)?;
    Ok((payload[0], parser::flag_at(payload, 1)?))
}

/// Write a text record to the next tag presented.
/// Layout: timeout(1) + lock(1) + text(UTF-8, rest of payload)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriteNdefText {
    /// Seconds to wait for a tag; 0 waits indefinitely.
    pub timeout: u8,
    /// Lock the tag after writing.
    pub lock: bool,
    /// Record text.
    pub text: String,
}

impl WriteNdefText {
    /// Build from field values.
    pub fn new(timeout: u8, lock: bool, text: impl Into<String>) -> Self {
        Self {
            timeout,
            lock,
            text: text.into(),
        }
    }
}

impl Message for WriteNdefText {
    const CODE: u8 = CommandCode::WriteNdefText as u8;

    fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = write_header(self.timeout, self.lock, self.text.len());
        buf.extend_from_slice(self.text.as_bytes());
        Ok(buf)
    }

    fn decode_with(&mut self, payload: &[u8], _options: &DecodeOptions) -> Result<()> {
        let (timeout, lock) = read_header(payload, WRITE_HEADER_LEN)?;
        self.timeout = timeout;
        self.lock = lock;
        self.text = parser::utf8_remainder(payload, WRITE_HEADER_LEN, "text")?;
        Ok(())
    }
}

/// Write a URI record to the next tag presented.
/// Layout: timeout(1) + lock(1) + uri_code(1) + uri(UTF-8, rest of payload)
///
/// `uri_code` indexes the NDEF URI prefix table (0x00 = no prefix,
/// 0x04 = "https://", ...); `uri` is the part after the prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriteNdefUri {
    /// Seconds to wait for a tag; 0 waits indefinitely.
    pub timeout: u8,
    /// Lock the tag after writing.
    pub lock: bool,
    /// URI without the prefix selected by `uri_code`.
    pub uri: String,
    /// NDEF URI prefix code.
    pub uri_code: u8,
}

impl WriteNdefUri {
    /// Build from field values.
    pub fn new(timeout: u8, lock: bool, uri: impl Into<String>, uri_code: u8) -> Self {
        Self {
            timeout,
            lock,
            uri: uri.into(),
            uri_code,
        }
    }
}

impl Message for WriteNdefUri {
    const CODE: u8 = CommandCode::WriteNdefUri as u8;

    fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = write_header(self.timeout, self.lock, 1 + self.uri.len());
        buf.push(self.uri_code);
        buf.extend_from_slice(self.uri.as_bytes());
        Ok(buf)
    }

    fn decode_with(&mut self, payload: &[u8], _options: &DecodeOptions) -> Result<()> {
        let (timeout, lock) = read_header(payload, WRITE_URI_HEADER_LEN)?;
        self.timeout = timeout;
        self.lock = lock;
        self.uri_code = payload[2];
        self.uri = parser::utf8_remainder(payload, WRITE_URI_HEADER_LEN, "uri")?;
        Ok(())
    }
}

/// Write a caller-built NDEF message verbatim.
/// Layout: timeout(1) + lock(1) + message(rest of payload)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriteNdefCustom {
    /// Seconds to wait for a tag; 0 waits indefinitely.
    pub timeout: u8,
    /// Lock the tag after writing.
    pub lock: bool,
    /// Complete NDEF message.
    pub message: Vec<u8>,
}

impl WriteNdefCustom {
    /// Build from field values.
    pub fn new(timeout: u8, lock: bool, message: impl Into<Vec<u8>>) -> Self {
        Self {
            timeout,
            lock,
            message: message.into(),
        }
    }
}

impl Message for WriteNdefCustom {
    const CODE: u8 = CommandCode::WriteNdefCustom as u8;

    fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = write_header(self.timeout, self.lock, self.message.len());
        buf.extend_from_slice(&self.message);
        Ok(buf)
    }

    fn decode_with(&mut self, payload: &[u8], _options: &DecodeOptions) -> Result<()> {
        let (timeout, lock) = read_header(payload, WRITE_HEADER_LEN)?;
        self.timeout = timeout;
        self.lock = lock;
        self.message = parser::remainder(payload, WRITE_HEADER_LEN).to_vec();
        Ok(())
    }
}
