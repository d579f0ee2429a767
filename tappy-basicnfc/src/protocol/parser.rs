// tappy-basicnfc/src/protocol/parser.rs

use crate::constants::MAX_PREFIXED_LEN;
use crate::{Error, Result};

/// Ensure the payload has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::PayloadTooShort {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Everything from `idx` to the end of the payload; empty when `idx` is at
/// or past the end.
pub fn remainder(data: &[u8], idx: usize) -> &[u8] {
    data.get(idx..).unwrap_or(&[])
}

/// Decode the payload tail starting at `idx` as UTF-8.
pub fn utf8_remainder(data: &[u8], idx: usize, field: &'static str) -> Result<String> {
    let tail = remainder(data, idx);
    std::str::from_utf8(tail)
        .map(str::to_owned)
        .map_err(|_| Error::InvalidUtf8 { field })
}

/// Decode the payload tail starting at `idx` one byte per character
/// (ISO-8859-1).
pub fn latin1_remainder(data: &[u8], idx: usize) -> String {
    remainder(data, idx).iter().map(|&b| b as char).collect()
}

/// Lock flags are set only by an exact `0x01`.
pub fn flag_at(data: &[u8], idx: usize) -> Result<bool> {
    Ok(byte_at(data, idx)? == crate::constants::LOCK_FLAG_SET)
}

/// Check that a field fits behind a one-byte length prefix and return the
/// prefix value.
pub fn length_prefix(field: &'static str, bytes: &[u8]) -> Result<u8> {
    if bytes.len() > MAX_PREFIXED_LEN {
        return Err(Error::FieldTooLong {
            field,
            max: MAX_PREFIXED_LEN,
            actual: bytes.len(),
        });
    }
    Ok(bytes.len() as u8)
}
