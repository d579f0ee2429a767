// tappy-basicnfc/src/protocol/commands/system.rs

use crate::protocol::message::Message;
use crate::protocol::options::DecodeOptions;
use crate::types::CommandCode;
use crate::Result;

/// Stop any running scan, stream or write operation. Empty payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop;

impl Message for Stop {
    const CODE: u8 = CommandCode::Stop as u8;

    fn encode(&self) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn decode_with(&mut self, _payload: &[u8], _options: &DecodeOptions) -> Result<()> {
        Ok(())
    }
}

/// Ask the reader for the version of its basic NFC library. Empty payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GetLibraryVersion;

impl Message for GetLibraryVersion {
    const CODE: u8 = CommandCode::GetLibraryVersion as u8;

    fn encode(&self) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn decode_with(&mut self, _payload: &[u8], _options: &DecodeOptions) -> Result<()> {
        Ok(())
    }
}
