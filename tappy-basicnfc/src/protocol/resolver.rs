// tappy-basicnfc/src/protocol/resolver.rs

use log::{debug, warn};

use super::commands::Command;
use super::envelope::{Envelope, RawMessage};
use super::options::{DecodeOptions, ErrorTextEncoding, TruncatedIdPolicy};
use super::responses::Response;
use crate::types::{CommandCode, ResponseCode};
use crate::{Error, Result};

/// Turns envelopes handed over by the outer framer into typed commands and
/// responses.
///
/// A family other than `0x00 0x01` is a hard error (`UnsupportedFamily`).
/// A code that is not in the registry is not an error: resolution returns
/// `Ok(None)` so the caller can hand the envelope to another handler.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    options: DecodeOptions,
}

impl Resolver {
    /// Resolver with strict decode options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a [`ResolverBuilder`].
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    /// Options passed to every decode.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Whether `msg` belongs to the basic NFC family.
    pub fn check_family<E: Envelope + ?Sized>(&self, msg: &E) -> bool {
        msg.family().is_basic_nfc()
    }

    /// Like [`Resolver::check_family`] but a foreign family is an error.
    pub fn validate<E: Envelope + ?Sized>(&self, msg: &E) -> Result<()> {
        if self.check_family(msg) {
            Ok(())
        } else {
            warn!(
                "rejecting message from family {} (code {:#04x})",
                msg.family(),
                msg.code()
            );
            Err(Error::UnsupportedFamily {
                actual: msg.family(),
            })
        }
    }

    /// Decode `msg` as a command; `Ok(None)` for an unknown code.
    pub fn resolve_command<E: Envelope + ?Sized>(&self, msg: &E) -> Result<Option<Command>> {
        self.validate(msg)?;
        let code = match CommandCode::try_from(msg.code()) {
            Ok(code) => code,
            Err(_) => {
                debug!("no basic nfc command with code {:#04x}", msg.code());
                return Ok(None);
            }
        };

        let command = Command::decode(code, msg.payload(), &self.options)?;
        debug!("resolved command {}", code);
        Ok(Some(command))
    }

    /// Decode `msg` as a response; `Ok(None)` for an unknown code.
    pub fn resolve_response<E: Envelope + ?Sized>(&self, msg: &E) -> Result<Option<Response>> {
        self.validate(msg)?;
        let code = match ResponseCode::try_from(msg.code()) {
            Ok(code) => code,
            Err(_) => {
                debug!("no basic nfc response with code {:#04x}", msg.code());
                return Ok(None);
            }
        };

        let response = Response::decode(code, msg.payload(), &self.options)?;
        debug!("resolved response {}", code);
        Ok(Some(response))
    }

    /// Resolve a command from an untyped `[family(2), code(1), payload...]`
    /// buffer. Fails with `NotAMessage` when the header is incomplete.
    pub fn resolve_command_bytes(&self, bytes: &[u8]) -> Result<Option<Command>> {
        self.resolve_command(&RawMessage::parse(bytes)?)
    }

    /// Response counterpart of [`Resolver::resolve_command_bytes`].
    pub fn resolve_response_bytes(&self, bytes: &[u8]) -> Result<Option<Response>> {
        self.resolve_response(&RawMessage::parse(bytes)?)
    }
}

/// Helper to construct a Resolver with non-default decode options.
#[derive(Debug, Clone, Default)]
pub struct ResolverBuilder {
    options: DecodeOptions,
}

impl ResolverBuilder {
    /// Builder with strict defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the lenient decode options (see [`DecodeOptions::legacy`]).
    pub fn legacy(mut self) -> Self {
        self.options = DecodeOptions::legacy();
        self
    }

    /// Set the truncated-id policy.
    pub fn truncated_id(mut self, policy: TruncatedIdPolicy) -> Self {
        self.options.truncated_id = policy;
        self
    }

    /// Set the error text encoding.
    pub fn error_text(mut self, encoding: ErrorTextEncoding) -> Self {
        self.options.error_text = encoding;
        self
    }

    /// Replace all options at once.
    pub fn options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Finish building.
    pub fn build(self) -> Resolver {
        Resolver {
            options: self.options,
        }
    }
}
