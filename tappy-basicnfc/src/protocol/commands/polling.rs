// tappy-basicnfc/src/protocol/commands/polling.rs

use crate::constants::POLLING_PAYLOAD_LEN;
use crate::protocol::message::Message;
use crate::protocol::options::DecodeOptions;
use crate::protocol::parser;
use crate::types::{CommandCode, PollingMode};
use crate::Result;

/// Polling command shared by the scan and stream commands.
/// Layout: timeout(1) + polling_mode(1)
///
/// The four polling commands differ only in their code, which is carried in
/// the const parameter. `timeout` is in seconds; 0 polls until stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollingCommand<const C: u8> {
    /// Seconds to poll; 0 polls until stopped.
    pub timeout: u8,
    /// Raw polling mode byte, see [`PollingMode`].
    pub polling_mode: u8,
}

/// Report every tag that enters the field until stopped or timed out.
pub type StreamTags = PollingCommand<{ CommandCode::StreamTags as u8 }>;
/// Report the first tag that enters the field.
pub type ScanTag = PollingCommand<{ CommandCode::ScanTag as u8 }>;
/// Report the NDEF content of every tag until stopped or timed out.
pub type StreamNdef = PollingCommand<{ CommandCode::StreamNdef as u8 }>;
/// Report the NDEF content of the first tag.
pub type ScanNdef = PollingCommand<{ CommandCode::ScanNdef as u8 }>;

impl<const C: u8> PollingCommand<C> {
    /// Build from field values.
    pub fn new(timeout: u8, polling_mode: impl Into<u8>) -> Self {
        Self {
            timeout,
            polling_mode: polling_mode.into(),
        }
    }

    /// The polling mode as a known value, if it is one.
    pub fn mode(&self) -> Option<PollingMode> {
        PollingMode::try_from(self.polling_mode).ok()
    }
}

impl<const C: u8> Default for PollingCommand<C> {
    fn default() -> Self {
        Self::new(0x00, PollingMode::General)
    }
}

impl<const C: u8> Message for PollingCommand<C> {
    const CODE: u8 = C;

    fn encode(&self) -> Result<Vec<u8>> {
        Ok(vec![self.timeout, self.polling_mode])
    }

    fn decode_with(&mut self, payload: &[u8], _options: &DecodeOptions) -> Result<()> {
        parser::ensure_len(payload, POLLING_PAYLOAD_LEN)?;
        self.timeout = payload[0];
        self.polling_mode = payload[1];
        Ok(())
    }
}
