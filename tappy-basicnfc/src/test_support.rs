//! Test support helpers intended for use by unit and integration tests.
//!
//! These build envelopes the way an outer framer would hand them over, so
//! tests across the crate and tests/ directory share the same setup.
#![allow(dead_code)]

use crate::protocol::{Command, Message, RawMessage, Resolver, Response};
use crate::types::FamilyCode;
use crate::Result;

/// Envelope in the basic NFC family built from a hex payload string.
#[doc(hidden)]
pub fn raw_from_hex(code: u8, payload_hex: &str) -> std::result::Result<RawMessage, String> {
    let payload = crate::utils::parse_hex(payload_hex)?;
    Ok(RawMessage::basic_nfc(code, payload))
}

/// Same code and payload as `msg`, but tagged with another family.
#[doc(hidden)]
pub fn with_foreign_family<M: Message>(msg: &M, family: [u8; 2]) -> Result<RawMessage> {
    Ok(RawMessage::new(FamilyCode::new(family), msg.code(), msg.encode()?))
}

/// Encode a command into its envelope and resolve it back.
#[doc(hidden)]
pub fn command_roundtrip(resolver: &Resolver, cmd: &Command) -> Result<Option<Command>> {
    resolver.resolve_command(&cmd.to_raw()?)
}

/// Encode a response into its envelope and resolve it back.
#[doc(hidden)]
pub fn response_roundtrip(resolver: &Resolver, resp: &Response) -> Result<Option<Response>> {
    resolver.resolve_response(&resp.to_raw()?)
}
