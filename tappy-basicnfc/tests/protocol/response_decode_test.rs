use tappy_basicnfc::prelude::*;

use crate::common::fixtures;

#[test]
fn every_response_reports_basic_nfc_family() {
    for resp in Response::defaults() {
        assert!(resp.to_raw().unwrap().family().is_basic_nfc());
    }
}

#[test]
fn response_codes_match_registry() {
    assert_eq!(LibraryVersion::default().code(), 0x04);
    assert_eq!(TagWritten::default().code(), 0x05);
    assert_eq!(TagFound::default().code(), 0x01);
    assert_eq!(ScanTimeout.code(), 0x03);
    assert_eq!(NdefFound::default().code(), 0x02);
    assert_eq!(TagLocked::default().code(), 0x06);
    assert_eq!(ApplicationError::default().code(), 0x7F);
}

#[test]
fn library_version_payload() {
    let version = LibraryVersion::new(0x02, 0x05);
    assert_eq!(version.encode().unwrap(), vec![0x02, 0x05]);
    let mut parsed = LibraryVersion::default();
    parsed.decode(&[0x02, 0x05]).unwrap();
    assert_eq!(parsed, version);
}

#[test]
fn application_error_payload() {
    let err = ApplicationError::new(0x03, 0x07, 0x74, "Test");
    assert_eq!(
        err.encode().unwrap(),
        vec![0x03, 0x07, 0x74, 0x54, 0x65, 0x73, 0x74]
    );

    let mut parsed = ApplicationError::default();
    parsed.decode(&[0x55, 0x21, 0xF5, 0x58]).unwrap();
    assert_eq!(parsed.error_code, 0x55);
    assert_eq!(parsed.internal_error_code, 0x21);
    assert_eq!(parsed.reader_status, 0xF5);
    assert_eq!(parsed.message, "X");
}

#[test]
fn tag_written_and_found_payloads() {
    let written = TagWritten::new(fixtures::sample_tag_code(), 0x05);
    assert_eq!(
        written.encode().unwrap(),
        vec![0x05, 0x54, 0x56, 0x23, 0x99]
    );
    let parsed = TagWritten::from_payload(&[0x05, 0x54, 0x56, 0x23, 0x99]).unwrap();
    assert_eq!(parsed.tag_type, 0x05);
    assert_eq!(parsed.tag_code, fixtures::sample_tag_code());

    let found = TagFound::new(fixtures::sample_tag_code(), 0x05);
    assert_eq!(found.encode().unwrap(), written.encode().unwrap());
    assert_eq!(TagFound::from_payload(&[0x05, 0x54, 0x56, 0x23, 0x99]).unwrap(), found);
}

#[test]
fn ndef_found_payload() {
    let found = NdefFound::new(
        fixtures::sample_tag_code(),
        0x05,
        vec![0x77, 0x88, 0x99, 0x2A],
    );
    let expected = vec![0x05, 0x04, 0x54, 0x56, 0x23, 0x99, 0x77, 0x88, 0x99, 0x2A];
    assert_eq!(found.encode().unwrap(), expected);
    assert_eq!(NdefFound::from_payload(&expected).unwrap(), found);
}

#[test]
fn ndef_found_seven_byte_uid() {
    let payload = fixtures::ndef_found_payload();
    let found = NdefFound::from_payload(&payload).unwrap();
    assert_eq!(found.tag_type, 0x02);
    assert_eq!(found.tag_code, fixtures::sample_uid7());
    assert_eq!(found.message, fixtures::sample_ndef_message());
    assert_eq!(found.tag_code_hex(), "048e2a125c3f80");
}
