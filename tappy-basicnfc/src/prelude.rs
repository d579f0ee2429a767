// tappy-basicnfc/src/prelude.rs

pub use crate::protocol::{
    ApplicationError, Command, DecodeOptions, Envelope, GetLibraryVersion, LibraryVersion,
    LockTag, Message, NdefFound, RawMessage, Resolver, Response, ScanNdef, ScanTag, ScanTimeout,
    Stop, StreamNdef, StreamTags, TagFound, TagLocked, TagWritten, WriteNdefCustom,
    WriteNdefText, WriteNdefUri,
};
pub use crate::{
    ApplicationErrorCode, CommandCode, Error, FamilyCode, PollingMode, ResponseCode, Result,
};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
