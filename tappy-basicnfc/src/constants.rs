// tappy-basicnfc/src/constants.rs
//! Protocol constants for the basic NFC command family

/// Family identifier carried alongside every basic NFC command and response
pub const BASIC_NFC_FAMILY: [u8; 2] = [0x00, 0x01];

/// Length of the family identifier in bytes
pub const FAMILY_LEN: usize = 2;

/// Untyped envelope header: family(2) + code(1)
pub const ENVELOPE_HEADER_LEN: usize = FAMILY_LEN + 1;

/// Largest value a one-byte length prefix can describe
pub const MAX_PREFIXED_LEN: usize = 255;

/// Polling commands: timeout(1) + polling_mode(1)
pub const POLLING_PAYLOAD_LEN: usize = 2;

/// WriteNdefText / WriteNdefCustom header: timeout(1) + lock(1)
pub const WRITE_HEADER_LEN: usize = 2;

/// WriteNdefUri header: timeout(1) + lock(1) + uri_code(1)
pub const WRITE_URI_HEADER_LEN: usize = 3;

/// Length-prefixed id layouts (LockTag, TagLocked, NdefFound): lead(1) + len(1)
pub const PREFIXED_ID_HEADER_LEN: usize = 2;

/// LibraryVersion: major(1) + minor(1)
pub const LIBRARY_VERSION_LEN: usize = 2;

/// ApplicationError header: error_code(1) + internal_error_code(1) + reader_status(1)
pub const APPLICATION_ERROR_HEADER_LEN: usize = 3;

/// Wire value of an enabled lock flag
pub const LOCK_FLAG_SET: u8 = 0x01;

/// Wire value of a cleared lock flag
pub const LOCK_FLAG_CLEAR: u8 = 0x00;

/// Default tag code length used by freshly constructed tag responses
pub const DEFAULT_TAG_CODE_LEN: usize = 4;
