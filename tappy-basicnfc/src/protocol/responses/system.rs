// tappy-basicnfc/src/protocol/responses/system.rs

use crate::constants::LIBRARY_VERSION_LEN;
use crate::protocol::message::Message;
use crate::protocol::options::DecodeOptions;
use crate::protocol::parser;
use crate::types::ResponseCode;
use crate::Result;

/// A scan or stream ended without seeing a tag. Empty payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanTimeout;

impl Message for ScanTimeout {
    const CODE: u8 = ResponseCode::ScanTimeout as u8;

    fn encode(&self) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn decode_with(&mut self, _payload: &[u8], _options: &DecodeOptions) -> Result<()> {
        Ok(())
    }
}

/// Version of the reader's basic NFC library.
/// Layout: major(1) + minor(1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LibraryVersion {
    /// Major version.
    pub major_version: u8,
    /// Minor version.
    pub minor_version: u8,
}

impl LibraryVersion {
    /// Build from field values.
    pub fn new(major_version: u8, minor_version: u8) -> Self {
        Self {
            major_version,
            minor_version,
        }
    }
}

impl std::fmt::Display for LibraryVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major_version, self.minor_version)
    }
}

impl Message for LibraryVersion {
    const CODE: u8 = ResponseCode::LibraryVersion as u8;

    fn encode(&self) -> Result<Vec<u8>> {
        Ok(vec![self.major_version, self.minor_version])
    }

    fn decode_with(&mut self, payload: &[u8], _options: &DecodeOptions) -> Result<()> {
        parser::ensure_len(payload, LIBRARY_VERSION_LEN)?;
        self.major_version = payload[0];
        self.minor_version = payload[1];
        Ok(())
    }
}
