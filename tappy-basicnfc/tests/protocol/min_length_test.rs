// For every type with a minimum payload length L: every shorter payload
// fails with PayloadTooShort, and a payload of exactly L decodes with empty
// tails.

use tappy_basicnfc::prelude::*;

fn assert_min_len<M: Message + std::fmt::Debug>(min: usize) {
    for len in 0..min {
        let payload = vec![0x00u8; len];
        match M::from_payload(&payload) {
            Err(Error::PayloadTooShort { expected, actual }) => {
                assert_eq!(actual, len);
                assert!(expected > len);
            }
            other => panic!("code {:#04x}, len {}: got {:?}", M::CODE, len, other),
        }
    }
    let exact = vec![0x00u8; min];
    M::from_payload(&exact).unwrap();
}

#[test]
fn command_minimum_lengths() {
    assert_min_len::<Stop>(0);
    assert_min_len::<GetLibraryVersion>(0);
    assert_min_len::<StreamTags>(2);
    assert_min_len::<ScanTag>(2);
    assert_min_len::<StreamNdef>(2);
    assert_min_len::<ScanNdef>(2);
    assert_min_len::<WriteNdefText>(2);
    assert_min_len::<WriteNdefCustom>(2);
    assert_min_len::<WriteNdefUri>(3);
    assert_min_len::<LockTag>(2);
}

#[test]
fn response_minimum_lengths() {
    assert_min_len::<ScanTimeout>(0);
    assert_min_len::<TagFound>(1);
    assert_min_len::<TagWritten>(1);
    assert_min_len::<NdefFound>(2);
    assert_min_len::<TagLocked>(2);
    assert_min_len::<LibraryVersion>(2);
    assert_min_len::<ApplicationError>(3);
}

#[test]
fn exact_length_leaves_tails_empty() {
    assert!(WriteNdefText::from_payload(&[0x00, 0x00]).unwrap().text.is_empty());
    assert!(WriteNdefUri::from_payload(&[0x00, 0x00, 0x00]).unwrap().uri.is_empty());
    assert!(WriteNdefCustom::from_payload(&[0x00, 0x00]).unwrap().message.is_empty());
    assert!(LockTag::from_payload(&[0x00, 0x00]).unwrap().tag_id.is_empty());
    assert!(TagFound::from_payload(&[0x00]).unwrap().tag_code.is_empty());
    assert!(TagWritten::from_payload(&[0x00]).unwrap().tag_code.is_empty());
    let ndef = NdefFound::from_payload(&[0x00, 0x00]).unwrap();
    assert!(ndef.tag_code.is_empty() && ndef.message.is_empty());
    assert!(TagLocked::from_payload(&[0x00, 0x00]).unwrap().tag_code.is_empty());
    assert!(ApplicationError::from_payload(&[0x00, 0x00, 0x00]).unwrap().message.is_empty());
}
