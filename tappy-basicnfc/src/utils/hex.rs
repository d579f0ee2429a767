//! Hexadecimal formatting and parsing for tag codes and payload dumps.

use std::fmt::Write;

/// Lowercase hex without separators, e.g. `&[0x04, 0xa2]` -> `"04a2"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // writing into a String cannot fail
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Lowercase hex with one space between bytes, e.g. `"04 a2"`.
///
/// Used by the `trace!` payload dumps.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        let _ = write!(s, "{:02x}", b);
    }
    s
}

/// Parse a hex string, ignoring whitespace. Upper and lower case digits
/// are accepted; anything else (including a sign) is rejected.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if let Some(bad) = digits.iter().find(|b| !b.is_ascii_hexdigit()) {
        return Err(format!("invalid hex digit '{}'", bad.escape_ascii()));
    }
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits: {}", digits.len()));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}
