// tappy-basicnfc/src/protocol/message.rs

use log::trace;

use crate::Result;
use crate::protocol::envelope::{Envelope, RawMessage};
use crate::protocol::options::DecodeOptions;
use crate::types::FamilyCode;
use crate::utils::bytes_to_hex_spaced;

/// Contract shared by every basic NFC command and response.
///
/// `encode` produces the payload only; family and code are framed by the
/// caller. `decode_with` populates `self` in place from a payload and fails
/// with `PayloadTooShort` when the payload is below the type's minimum
/// length. A failed decode leaves the fields unspecified.
pub trait Message: Default {
    /// Fixed code of this message type within its registry.
    const CODE: u8;

    /// Always the basic NFC family.
    fn family(&self) -> FamilyCode {
        FamilyCode::BASIC_NFC
    }

    /// Same as [`Message::CODE`].
    fn code(&self) -> u8 {
        Self::CODE
    }

    /// Serialize the fields into a payload.
    fn encode(&self) -> Result<Vec<u8>>;

    /// Populate `self` from `payload` using `options`.
    fn decode_with(&mut self, payload: &[u8], options: &DecodeOptions) -> Result<()>;

    /// [`Message::decode_with`] with default options.
    fn decode(&mut self, payload: &[u8]) -> Result<()> {
        self.decode_with(payload, &DecodeOptions::default())
    }

    /// Construct a default instance and decode `payload` into it.
    fn from_payload_with(payload: &[u8], options: &DecodeOptions) -> Result<Self> {
        trace!(
            "decoding code {:#04x} from [{}]",
            Self::CODE,
            bytes_to_hex_spaced(payload)
        );
        let mut message = Self::default();
        message.decode_with(payload, options)?;
        Ok(message)
    }

    /// [`Message::from_payload_with`] with default options.
    fn from_payload(payload: &[u8]) -> Result<Self> {
        Self::from_payload_with(payload, &DecodeOptions::default())
    }

    /// Whether `msg` is in the basic NFC family and carries this type's code.
    fn is_type_of<E: Envelope + ?Sized>(msg: &E) -> bool {
        msg.family().is_basic_nfc() && msg.code() == Self::CODE
    }

    /// Encode into an owned envelope ready for the outer framer.
    fn to_raw(&self) -> Result<RawMessage> {
        Ok(RawMessage::new(self.family(), self.code(), self.encode()?))
    }
}
