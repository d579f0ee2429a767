// tappy-basicnfc/src/protocol/commands/mod.rs

/// LockTag.
pub mod lock;
/// Scan and stream commands.
pub mod polling;
/// Stop and GetLibraryVersion.
pub mod system;
/// NDEF write commands.
pub mod write;

pub use lock::LockTag;
pub use polling::{PollingCommand, ScanNdef, ScanTag, StreamNdef, StreamTags};
pub use system::{GetLibraryVersion, Stop};
pub use write::{WriteNdefCustom, WriteNdefText, WriteNdefUri};

use derive_more::From;

use super::envelope::RawMessage;
use super::message::Message;
use super::options::DecodeOptions;
use crate::types::CommandCode;
use crate::Result;

/// Every command of the basic NFC family. New commands need a variant here,
/// a `CommandCode`, and an arm in each match below.
#[derive(Debug, Clone, PartialEq, Eq, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Stop the current operation.
    Stop(Stop),
    /// Stream tag detections.
    StreamTags(StreamTags),
    /// Scan for one tag.
    ScanTag(ScanTag),
    /// Stream NDEF reads.
    StreamNdef(StreamNdef),
    /// Read NDEF from one tag.
    ScanNdef(ScanNdef),
    /// Write a URI record.
    WriteNdefUri(WriteNdefUri),
    /// Write a text record.
    WriteNdefText(WriteNdefText),
    /// Write a raw NDEF message.
    WriteNdefCustom(WriteNdefCustom),
    /// Lock a tag.
    LockTag(LockTag),
    /// Query the library version.
    GetLibraryVersion(GetLibraryVersion),
}

impl Command {
    /// Registry code of the wrapped command.
    pub fn command_code(&self) -> CommandCode {
        match self {
            Self::Stop(_) => CommandCode::Stop,
            Self::StreamTags(_) => CommandCode::StreamTags,
            Self::ScanTag(_) => CommandCode::ScanTag,
            Self::StreamNdef(_) => CommandCode::StreamNdef,
            Self::ScanNdef(_) => CommandCode::ScanNdef,
            Self::WriteNdefUri(_) => CommandCode::WriteNdefUri,
            Self::WriteNdefText(_) => CommandCode::WriteNdefText,
            Self::WriteNdefCustom(_) => CommandCode::WriteNdefCustom,
            Self::LockTag(_) => CommandCode::LockTag,
            Self::GetLibraryVersion(_) => CommandCode::GetLibraryVersion,
        }
    }

    /// Encode the command payload (without family or code).
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::Stop(c) => c.encode(),
            Self::StreamTags(c) => c.encode(),
            Self::ScanTag(c) => c.encode(),
            Self::StreamNdef(c) => c.encode(),
            Self::ScanNdef(c) => c.encode(),
            Self::WriteNdefUri(c) => c.encode(),
            Self::WriteNdefText(c) => c.encode(),
            Self::WriteNdefCustom(c) => c.encode(),
            Self::LockTag(c) => c.encode(),
            Self::GetLibraryVersion(c) => c.encode(),
        }
    }

    /// Construct the variant for `code` and decode `payload` into it.
    pub fn decode(code: CommandCode, payload: &[u8], options: &DecodeOptions) -> Result<Self> {
        Ok(match code {
            CommandCode::Stop => Stop::from_payload_with(payload, options)?.into(),
            CommandCode::StreamTags => StreamTags::from_payload_with(payload, options)?.into(),
            CommandCode::ScanTag => ScanTag::from_payload_with(payload, options)?.into(),
            CommandCode::StreamNdef => StreamNdef::from_payload_with(payload, options)?.into(),
            CommandCode::ScanNdef => ScanNdef::from_payload_with(payload, options)?.into(),
            CommandCode::WriteNdefUri => WriteNdefUri::from_payload_with(payload, options)?.into(),
            CommandCode::WriteNdefText => {
                WriteNdefText::from_payload_with(payload, options)?.into()
            }
            CommandCode::WriteNdefCustom => {
                WriteNdefCustom::from_payload_with(payload, options)?.into()
            }
            CommandCode::LockTag => LockTag::from_payload_with(payload, options)?.into(),
            CommandCode::GetLibraryVersion => {
                GetLibraryVersion::from_payload_with(payload, options)?.into()
            }
        })
    }

    /// Encode into an envelope in the basic NFC family.
    pub fn to_raw(&self) -> Result<RawMessage> {
        Ok(RawMessage::basic_nfc(
            self.command_code().as_u8(),
            self.encode()?,
        ))
    }

    /// A default-constructed instance of every command, in code order.
    pub fn defaults() -> Vec<Self> {
        vec![
            Stop.into(),
            StreamTags::default().into(),
            ScanTag::default().into(),
            StreamNdef::default().into(),
            ScanNdef::default().into(),
            WriteNdefUri::default().into(),
            WriteNdefText::default().into(),
            WriteNdefCustom::default().into(),
            LockTag::default().into(),
            GetLibraryVersion.into(),
        ]
    }
}
