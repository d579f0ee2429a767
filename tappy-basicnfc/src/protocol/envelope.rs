// tappy-basicnfc/src/protocol/envelope.rs

use crate::constants::{ENVELOPE_HEADER_LEN, FAMILY_LEN};
use crate::types::FamilyCode;
use crate::{Error, Result};

/// A framed message as handed over by the outer framing layer: family and
/// code travel next to the payload, never inside it.
pub trait Envelope {
    /// Command family.
    fn family(&self) -> FamilyCode;
    /// Code within the family.
    fn code(&self) -> u8;
    /// Payload bytes, without family or code.
    fn payload(&self) -> &[u8];
}

impl<E: Envelope + ?Sized> Envelope for &E {
    fn family(&self) -> FamilyCode {
        (**self).family()
    }

    fn code(&self) -> u8 {
        (**self).code()
    }

    fn payload(&self) -> &[u8] {
        (**self).payload()
    }
}

/// Owned envelope with an arbitrary family, code and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawMessage {
    family: FamilyCode,
    code: u8,
    payload: Vec<u8>,
}

impl RawMessage {
    /// Envelope in an arbitrary family.
    pub fn new(family: FamilyCode, code: u8, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            family,
            code,
            payload: payload.into(),
        }
    }

    /// Envelope in the basic NFC family.
    pub fn basic_nfc(code: u8, payload: impl Into<Vec<u8>>) -> Self {
        Self::new(FamilyCode::BASIC_NFC, code, payload)
    }

    /// Parse an untyped buffer laid out as `[family(2), code(1), payload...]`.
    ///
    /// This is the only place where `NotAMessage` can occur: a buffer too
    /// short to hold the header cannot be a message of any family.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < ENVELOPE_HEADER_LEN {
            return Err(Error::NotAMessage(format!(
                "need at least {} bytes for family and code, got {}",
                ENVELOPE_HEADER_LEN,
                bytes.len()
            )));
        }
        let family = FamilyCode::try_from(&bytes[..FAMILY_LEN])?;
        Ok(Self::new(
            family,
            bytes[FAMILY_LEN],
            &bytes[ENVELOPE_HEADER_LEN..],
        ))
    }

    /// Inverse of [`RawMessage::parse`].
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(ENVELOPE_HEADER_LEN + self.payload.len());
        out.extend_from_slice(self.family.as_bytes());
        out.push(self.code);
        out.extend_from_slice(&self.payload);
        out
    }

    /// Consume the envelope, keeping the payload.
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}

impl Envelope for RawMessage {
    fn family(&self) -> FamilyCode {
        self.family
    }

    fn code(&self) -> u8 {
        self.code
    }

    fn payload(&self) -> &[u8] {
        &self.payload
    }
}
