// Commonly used payloads and envelopes

use tappy_basicnfc::protocol::RawMessage;

pub fn sample_tag_code() -> Vec<u8> {
    vec![0x54, 0x56, 0x23, 0x99]
}

pub fn sample_uid7() -> Vec<u8> {
    hex::decode("048e2a125c3f80").unwrap()
}

/// Short well-known text record ("en", "hi")
pub fn sample_ndef_message() -> Vec<u8> {
    hex::decode("d101055402656e6869").unwrap()
}

pub fn write_text_payload() -> Vec<u8> {
    vec![0x01, 0x01, 0x54, 0x45, 0x53, 0x54]
}

pub fn write_text_envelope() -> RawMessage {
    RawMessage::basic_nfc(0x06, write_text_payload())
}

pub fn ndef_found_payload() -> Vec<u8> {
    let mut payload = vec![0x02, sample_uid7().len() as u8];
    payload.extend_from_slice(&sample_uid7());
    payload.extend_from_slice(&sample_ndef_message());
    payload
}

/// Untyped buffer: family(2) + code(1) + payload
pub fn framed(code: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = vec![0x00, 0x01, code];
    out.extend_from_slice(payload);
    out
}
