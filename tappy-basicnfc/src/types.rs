// tappy-basicnfc/src/types.rs

use std::convert::TryFrom;
use std::fmt;

use derive_more::Display;

use crate::Error;
use crate::constants::BASIC_NFC_FAMILY;

/// Family identifier - Newtype Pattern (2 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FamilyCode([u8; 2]);

impl FamilyCode {
    /// The basic NFC family (`0x00 0x01`).
    pub const BASIC_NFC: Self = Self(BASIC_NFC_FAMILY);

    /// Wrap two raw family bytes.
    pub const fn new(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// Raw family bytes.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Whether this is `0x00 0x01`.
    pub fn is_basic_nfc(&self) -> bool {
        *self == Self::BASIC_NFC
    }
}

impl Default for FamilyCode {
    fn default() -> Self {
        Self::BASIC_NFC
    }
}

impl fmt::Display for FamilyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}{:02x}", self.0[0], self.0[1])
    }
}

impl TryFrom<&[u8]> for FamilyCode {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 2 {
            return Err(Error::NotAMessage(format!(
                "family identifier must be 2 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self([bytes[0], bytes[1]]))
    }
}

/// Codes of the commands a host sends to the reader.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandCode {
    /// Stop any running scan, stream or write
    #[display(fmt = "Stop")]
    Stop = 0x00,
    /// Report every tag until stopped
    #[display(fmt = "StreamTags")]
    StreamTags = 0x01,
    /// Report the first tag found
    #[display(fmt = "ScanTag")]
    ScanTag = 0x02,
    /// Report NDEF content of every tag until stopped
    #[display(fmt = "StreamNdef")]
    StreamNdef = 0x03,
    /// Report NDEF content of the first tag
    #[display(fmt = "ScanNdef")]
    ScanNdef = 0x04,
    /// Write a URI record
    #[display(fmt = "WriteNdefUri")]
    WriteNdefUri = 0x05,
    /// Write a text record
    #[display(fmt = "WriteNdefText")]
    WriteNdefText = 0x06,
    /// Write a caller-built NDEF message
    #[display(fmt = "WriteNdefCustom")]
    WriteNdefCustom = 0x07,
    /// Make a tag read-only
    #[display(fmt = "LockTag")]
    LockTag = 0x08,
    /// Ask for the reader library version
    #[display(fmt = "GetLibraryVersion")]
    GetLibraryVersion = 0xFF,
}

impl CommandCode {
    /// Every command code, in wire order.
    pub const ALL: [Self; 10] = [
        Self::Stop,
        Self::StreamTags,
        Self::ScanTag,
        Self::StreamNdef,
        Self::ScanNdef,
        Self::WriteNdefUri,
        Self::WriteNdefText,
        Self::WriteNdefCustom,
        Self::LockTag,
        Self::GetLibraryVersion,
    ];

    /// Wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CommandCode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(Self::Stop),
            0x01 => Ok(Self::StreamTags),
            0x02 => Ok(Self::ScanTag),
            0x03 => Ok(Self::StreamNdef),
            0x04 => Ok(Self::ScanNdef),
            0x05 => Ok(Self::WriteNdefUri),
            0x06 => Ok(Self::WriteNdefText),
            0x07 => Ok(Self::WriteNdefCustom),
            0x08 => Ok(Self::LockTag),
            0xFF => Ok(Self::GetLibraryVersion),
            _ => Err(Error::UnknownCode {
                registry: "command",
                code,
            }),
        }
    }
}

impl From<CommandCode> for u8 {
    fn from(code: CommandCode) -> Self {
        code as u8
    }
}

/// Codes of the responses the reader sends back.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResponseCode {
    /// A tag entered the field
    #[display(fmt = "TagFound")]
    TagFound = 0x01,
    /// NDEF content was read
    #[display(fmt = "NdefFound")]
    NdefFound = 0x02,
    /// Polling ended without a tag
    #[display(fmt = "ScanTimeout")]
    ScanTimeout = 0x03,
    /// Reply to GetLibraryVersion
    #[display(fmt = "LibraryVersion")]
    LibraryVersion = 0x04,
    /// A write completed
    #[display(fmt = "TagWritten")]
    TagWritten = 0x05,
    /// A lock completed
    #[display(fmt = "TagLocked")]
    TagLocked = 0x06,
    /// The reader rejected or failed a command
    #[display(fmt = "ApplicationError")]
    ApplicationError = 0x7F,
}

impl ResponseCode {
    /// Every response code, in wire order.
    pub const ALL: [Self; 7] = [
        Self::TagFound,
        Self::NdefFound,
        Self::ScanTimeout,
        Self::LibraryVersion,
        Self::TagWritten,
        Self::TagLocked,
        Self::ApplicationError,
    ];

    /// Wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ResponseCode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x01 => Ok(Self::TagFound),
            0x02 => Ok(Self::NdefFound),
            0x03 => Ok(Self::ScanTimeout),
            0x04 => Ok(Self::LibraryVersion),
            0x05 => Ok(Self::TagWritten),
            0x06 => Ok(Self::TagLocked),
            0x7F => Ok(Self::ApplicationError),
            _ => Err(Error::UnknownCode {
                registry: "response",
                code,
            }),
        }
    }
}

impl From<ResponseCode> for u8 {
    fn from(code: ResponseCode) -> Self {
        code as u8
    }
}

/// Tag detection strategy passed through polling commands. The codec
/// stores the raw byte; this enum only names the known values.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PollingMode {
    /// Type 1 (Topaz) tags only
    #[display(fmt = "TYPE1")]
    Type1 = 0x01,
    /// Any supported tag type
    #[default]
    #[display(fmt = "GENERAL")]
    General = 0x02,
}

impl TryFrom<u8> for PollingMode {
    type Error = Error;

    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        match mode {
            0x01 => Ok(Self::Type1),
            0x02 => Ok(Self::General),
            _ => Err(Error::UnknownCode {
                registry: "polling mode",
                code: mode,
            }),
        }
    }
}

impl From<PollingMode> for u8 {
    fn from(mode: PollingMode) -> Self {
        mode as u8
    }
}

/// Application-level error codes reported in `ApplicationError` responses.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApplicationErrorCode {
    /// A parameter was specified that is not acceptable
    #[display(fmt = "invalid parameter")]
    InvalidParameter = 0x01,
    /// Reserved for future use
    #[display(fmt = "reserved")]
    Rfu = 0x02,
    /// A fatal error occurred during polling
    #[display(fmt = "polling error")]
    PollingError = 0x03,
    /// Not enough parameters were specified
    #[display(fmt = "too few parameters")]
    TooFewParameters = 0x04,
    /// The NDEF message does not fit on the presented tag
    #[display(fmt = "ndef message too large")]
    NdefMessageTooLarge = 0x05,
    /// The NDEF message could not be built
    #[display(fmt = "error creating ndef content")]
    ErrorCreatingNdefContent = 0x06,
    /// Writing to the tag failed
    #[display(fmt = "error writing ndef content")]
    ErrorWritingNdefContent = 0x07,
    /// The tag may be left locked or partially locked
    #[display(fmt = "error locking tag")]
    ErrorLockingTag = 0x08,
}

impl TryFrom<u8> for ApplicationErrorCode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x01 => Ok(Self::InvalidParameter),
            0x02 => Ok(Self::Rfu),
            0x03 => Ok(Self::PollingError),
            0x04 => Ok(Self::TooFewParameters),
            0x05 => Ok(Self::NdefMessageTooLarge),
            0x06 => Ok(Self::ErrorCreatingNdefContent),
            0x07 => Ok(Self::ErrorWritingNdefContent),
            0x08 => Ok(Self::ErrorLockingTag),
            _ => Err(Error::UnknownCode {
                registry: "application error",
                code,
            }),
        }
    }
}

impl From<ApplicationErrorCode> for u8 {
    fn from(code: ApplicationErrorCode) -> Self {
        code as u8
    }
}
