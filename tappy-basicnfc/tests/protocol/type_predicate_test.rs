use tappy_basicnfc::prelude::*;

fn command_envelopes() -> Vec<RawMessage> {
    Command::defaults()
        .iter()
        .map(|c| c.to_raw().unwrap())
        .collect()
}

fn response_envelopes() -> Vec<RawMessage> {
    Response::defaults()
        .iter()
        .map(|r| r.to_raw().unwrap())
        .collect()
}

/// Count how many of `envelopes` pass `M::is_type_of`.
fn matches<M: Message>(envelopes: &[RawMessage]) -> usize {
    envelopes.iter().filter(|e| M::is_type_of(*e)).count()
}

#[test]
fn each_command_passes_its_own_predicate() {
    assert!(Stop::is_type_of(&Stop.to_raw().unwrap()));
    assert!(StreamTags::is_type_of(&StreamTags::default().to_raw().unwrap()));
    assert!(ScanTag::is_type_of(&ScanTag::default().to_raw().unwrap()));
    assert!(StreamNdef::is_type_of(&StreamNdef::default().to_raw().unwrap()));
    assert!(ScanNdef::is_type_of(&ScanNdef::default().to_raw().unwrap()));
    assert!(WriteNdefUri::is_type_of(&WriteNdefUri::default().to_raw().unwrap()));
    assert!(WriteNdefText::is_type_of(&WriteNdefText::default().to_raw().unwrap()));
    assert!(WriteNdefCustom::is_type_of(&WriteNdefCustom::default().to_raw().unwrap()));
    assert!(LockTag::is_type_of(&LockTag::default().to_raw().unwrap()));
    assert!(GetLibraryVersion::is_type_of(&GetLibraryVersion.to_raw().unwrap()));
}

#[test]
fn each_response_passes_its_own_predicate() {
    assert!(TagFound::is_type_of(&TagFound::default().to_raw().unwrap()));
    assert!(NdefFound::is_type_of(&NdefFound::default().to_raw().unwrap()));
    assert!(ScanTimeout::is_type_of(&ScanTimeout.to_raw().unwrap()));
    assert!(LibraryVersion::is_type_of(&LibraryVersion::default().to_raw().unwrap()));
    assert!(TagWritten::is_type_of(&TagWritten::default().to_raw().unwrap()));
    assert!(TagLocked::is_type_of(&TagLocked::default().to_raw().unwrap()));
    assert!(ApplicationError::is_type_of(&ApplicationError::default().to_raw().unwrap()));
}

#[test]
fn command_predicates_match_exactly_one_command() {
    let envelopes = command_envelopes();
    assert_eq!(matches::<Stop>(&envelopes), 1);
    assert_eq!(matches::<StreamTags>(&envelopes), 1);
    assert_eq!(matches::<ScanTag>(&envelopes), 1);
    assert_eq!(matches::<StreamNdef>(&envelopes), 1);
    assert_eq!(matches::<ScanNdef>(&envelopes), 1);
    assert_eq!(matches::<WriteNdefUri>(&envelopes), 1);
    assert_eq!(matches::<WriteNdefText>(&envelopes), 1);
    assert_eq!(matches::<WriteNdefCustom>(&envelopes), 1);
    assert_eq!(matches::<LockTag>(&envelopes), 1);
    assert_eq!(matches::<GetLibraryVersion>(&envelopes), 1);
}

#[test]
fn response_predicates_match_exactly_one_response() {
    let envelopes = response_envelopes();
    assert_eq!(matches::<TagFound>(&envelopes), 1);
    assert_eq!(matches::<NdefFound>(&envelopes), 1);
    assert_eq!(matches::<ScanTimeout>(&envelopes), 1);
    assert_eq!(matches::<LibraryVersion>(&envelopes), 1);
    assert_eq!(matches::<TagWritten>(&envelopes), 1);
    assert_eq!(matches::<TagLocked>(&envelopes), 1);
    assert_eq!(matches::<ApplicationError>(&envelopes), 1);
}

#[test]
fn predicate_rejects_foreign_family() {
    let foreign = RawMessage::new(FamilyCode::new([0x01, 0x00]), 0x02, vec![0x00, 0x02]);
    assert!(!ScanTag::is_type_of(&foreign));
    assert!(!NdefFound::is_type_of(&foreign));
}

#[test]
fn predicate_ignores_payload() {
    let raw = RawMessage::basic_nfc(0x04, vec![0xFF; 40]);
    assert!(ScanNdef::is_type_of(&raw));
    assert!(LibraryVersion::is_type_of(&raw));
    assert!(!ScanTag::is_type_of(&raw));
}
