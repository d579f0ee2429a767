// tappy-basicnfc/src/protocol/responses/mod.rs

/// ApplicationError.
pub mod application_error;
/// TagLocked.
pub mod lock;
/// NdefFound.
pub mod ndef;
/// ScanTimeout and LibraryVersion.
pub mod system;
/// TagFound and TagWritten.
pub mod tag;

pub use application_error::ApplicationError;
pub use lock::TagLocked;
pub use ndef::NdefFound;
pub use system::{LibraryVersion, ScanTimeout};
pub use tag::{TagEvent, TagFound, TagWritten};

use derive_more::From;

use super::envelope::RawMessage;
use super::message::Message;
use super::options::DecodeOptions;
use crate::types::ResponseCode;
use crate::Result;

/// Every response of the basic NFC family. Per-response codecs live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Response {
    /// A tag was detected.
    TagFound(TagFound),
    /// NDEF content was read.
    NdefFound(NdefFound),
    /// Polling timed out.
    ScanTimeout(ScanTimeout),
    /// Library version reply.
    LibraryVersion(LibraryVersion),
    /// A tag was written.
    TagWritten(TagWritten),
    /// A tag was locked.
    TagLocked(TagLocked),
    /// The reader reported an error.
    ApplicationError(ApplicationError),
}

impl Response {
    /// Registry code of the wrapped response.
    pub fn response_code(&self) -> ResponseCode {
        match self {
            Self::TagFound(_) => ResponseCode::TagFound,
            Self::NdefFound(_) => ResponseCode::NdefFound,
            Self::ScanTimeout(_) => ResponseCode::ScanTimeout,
            Self::LibraryVersion(_) => ResponseCode::LibraryVersion,
            Self::TagWritten(_) => ResponseCode::TagWritten,
            Self::TagLocked(_) => ResponseCode::TagLocked,
            Self::ApplicationError(_) => ResponseCode::ApplicationError,
        }
    }

    /// Encode the response payload (without family or code).
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::TagFound(r) => r.encode(),
            Self::NdefFound(r) => r.encode(),
            Self::ScanTimeout(r) => r.encode(),
            Self::LibraryVersion(r) => r.encode(),
            Self::TagWritten(r) => r.encode(),
            Self::TagLocked(r) => r.encode(),
            Self::ApplicationError(r) => r.encode(),
        }
    }

    /// Construct the variant for `code` and decode `payload` into it.
    pub fn decode(code: ResponseCode, payload: &[u8], options: &DecodeOptions) -> Result<Self> {
        Ok(match code {
            ResponseCode::TagFound => TagFound::from_payload_with(payload, options)?.into(),
            ResponseCode::NdefFound => NdefFound::from_payload_with(payload, options)?.into(),
            ResponseCode::ScanTimeout => ScanTimeout::from_payload_with(payload, options)?.into(),
            ResponseCode::LibraryVersion => {
                LibraryVersion::from_payload_with(payload, options)?.into()
            }
            ResponseCode::TagWritten => TagWritten::from_payload_with(payload, options)?.into(),
            ResponseCode::TagLocked => TagLocked::from_payload_with(payload, options)?.into(),
            ResponseCode::ApplicationError => {
                ApplicationError::from_payload_with(payload, options)?.into()
            }
        })
    }

    /// Encode into an envelope in the basic NFC family.
    pub fn to_raw(&self) -> Result<RawMessage> {
        Ok(RawMessage::basic_nfc(
            self.response_code().as_u8(),
            self.encode()?,
        ))
    }

    /// A default-constructed instance of every response, in code order.
    pub fn defaults() -> Vec<Self> {
        vec![
            TagFound::default().into(),
            NdefFound::default().into(),
            ScanTimeout.into(),
            LibraryVersion::default().into(),
            TagWritten::default().into(),
            TagLocked::default().into(),
            ApplicationError::default().into(),
        ]
    }

    /// The tag UID for responses that carry one.
    pub fn tag_code(&self) -> Option<&[u8]> {
        match self {
            Self::TagFound(r) => Some(&r.tag_code),
            Self::NdefFound(r) => Some(&r.tag_code),
            Self::TagWritten(r) => Some(&r.tag_code),
            Self::TagLocked(r) => Some(&r.tag_code),
            Self::ScanTimeout(_) | Self::LibraryVersion(_) | Self::ApplicationError(_) => None,
        }
    }
}
