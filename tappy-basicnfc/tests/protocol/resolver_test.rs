use tappy_basicnfc::prelude::*;
use tappy_basicnfc::protocol::{ErrorTextEncoding, TruncatedIdPolicy};
use tappy_basicnfc::test_support;

use crate::common::{self, fixtures};

#[test]
fn resolves_write_ndef_text() {
    common::init_logging();
    let resolved = Resolver::new()
        .resolve_command(&fixtures::write_text_envelope())
        .unwrap();
    match resolved {
        Some(Command::WriteNdefText(cmd)) => {
            assert_eq!(cmd.text, "TEST");
            assert_eq!(cmd.timeout, 0x01);
            assert!(cmd.lock);
        }
        other => panic!("expected WriteNdefText, got {:?}", other),
    }
}

#[test]
fn every_default_command_resolves_to_itself() {
    common::init_logging();
    let resolver = Resolver::new();
    for cmd in Command::defaults() {
        let back = test_support::command_roundtrip(&resolver, &cmd).unwrap();
        assert_eq!(back.as_ref(), Some(&cmd));
    }
}

#[test]
fn every_default_response_resolves_to_itself() {
    common::init_logging();
    let resolver = Resolver::new();
    for resp in Response::defaults() {
        let back = test_support::response_roundtrip(&resolver, &resp).unwrap();
        assert_eq!(back.as_ref(), Some(&resp));
    }
}

#[test]
fn literal_instances_roundtrip_through_resolver() {
    let resolver = Resolver::new();
    let commands: Vec<Command> = vec![
        WriteNdefUri::new(0x0A, true, "tappy.io", 0x04).into(),
        WriteNdefCustom::new(0x00, false, fixtures::sample_ndef_message()).into(),
        LockTag::new(0x03, fixtures::sample_uid7()).into(),
        StreamNdef::new(0x00, PollingMode::Type1).into(),
    ];
    for cmd in &commands {
        assert_eq!(
            test_support::command_roundtrip(&resolver, cmd).unwrap().as_ref(),
            Some(cmd)
        );
    }

    let responses: Vec<Response> = vec![
        NdefFound::new(fixtures::sample_uid7(), 0x02, fixtures::sample_ndef_message()).into(),
        TagLocked::new(fixtures::sample_uid7(), 0x02).into(),
        ApplicationError::new(0x05, 0x10, 0x00, "NDEF too large").into(),
        LibraryVersion::new(0x01, 0x0C).into(),
    ];
    for resp in &responses {
        assert_eq!(
            test_support::response_roundtrip(&resolver, resp).unwrap().as_ref(),
            Some(resp)
        );
    }
}

#[test]
fn foreign_family_is_a_hard_failure() {
    let foreign = test_support::with_foreign_family(&ScanTag::default(), [0x00, 0x02]).unwrap();
    let resolver = Resolver::new();
    assert!(!resolver.check_family(&foreign));
    match resolver.validate(&foreign) {
        Err(Error::UnsupportedFamily { actual }) => {
            assert_eq!(actual, FamilyCode::new([0x00, 0x02]));
        }
        other => panic!("expected UnsupportedFamily, got {:?}", other),
    }
    assert!(resolver.resolve_command(&foreign).is_err());
}

#[test]
fn in_family_accepted_regardless_of_code() {
    let resolver = Resolver::new();
    for code in 0..=u8::MAX {
        let raw = RawMessage::basic_nfc(code, Vec::new());
        assert!(resolver.check_family(&raw));
        resolver.validate(&raw).unwrap();
    }
}

#[test]
fn unknown_codes_resolve_to_none() {
    let resolver = Resolver::new();
    let raw = test_support::raw_from_hex(0x09, "01 02").unwrap();
    assert_eq!(resolver.resolve_command(&raw).unwrap(), None);

    let raw = test_support::raw_from_hex(0x7E, "").unwrap();
    assert_eq!(resolver.resolve_response(&raw).unwrap(), None);
}

#[test]
fn same_code_means_different_things_per_registry() {
    // 0x05 is WriteNdefUri as a command and TagWritten as a response
    let raw = test_support::raw_from_hex(0x05, "01 01 05 41").unwrap();
    let resolver = Resolver::new();
    assert!(matches!(
        resolver.resolve_command(&raw).unwrap(),
        Some(Command::WriteNdefUri(_))
    ));
    match resolver.resolve_response(&raw).unwrap() {
        Some(Response::TagWritten(written)) => {
            assert_eq!(written.tag_type, 0x01);
            assert_eq!(written.tag_code, vec![0x01, 0x05, 0x41]);
        }
        other => panic!("expected TagWritten, got {:?}", other),
    }
}

#[test]
fn untyped_buffers() {
    common::init_logging();
    let resolver = Resolver::new();
    let bytes = fixtures::framed(0x02, &fixtures::ndef_found_payload());
    match resolver.resolve_response_bytes(&bytes).unwrap() {
        Some(Response::NdefFound(found)) => {
            assert_eq!(found.message, fixtures::sample_ndef_message());
        }
        other => panic!("expected NdefFound, got {:?}", other),
    }

    assert!(matches!(
        resolver.resolve_response_bytes(&[0x00]),
        Err(Error::NotAMessage(_))
    ));
    assert!(matches!(
        resolver.resolve_command_bytes(&[0x01, 0x00, 0x00]),
        Err(Error::UnsupportedFamily { .. })
    ));
}

#[test]
fn legacy_resolver_accepts_quirky_payloads() {
    common::init_logging();
    let legacy = Resolver::builder().legacy().build();
    assert_eq!(legacy.options().truncated_id, TruncatedIdPolicy::Ignore);
    assert_eq!(legacy.options().error_text, ErrorTextEncoding::Latin1);

    let lock = test_support::raw_from_hex(0x08, "05 07 04 a2").unwrap();
    assert!(Resolver::new().resolve_command(&lock).is_err());
    assert_eq!(
        legacy.resolve_command(&lock).unwrap(),
        Some(Command::LockTag(LockTag::new(0x05, Vec::new())))
    );

    let err = test_support::raw_from_hex(0x7F, "01 00 00 e9").unwrap();
    assert!(Resolver::new().resolve_response(&err).is_err());
    match legacy.resolve_response(&err).unwrap() {
        Some(Response::ApplicationError(e)) => assert_eq!(e.message, "é"),
        other => panic!("expected ApplicationError, got {:?}", other),
    }
}
