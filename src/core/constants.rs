//! Protocol constants from RFC 7301 and RFC 6066.
//!
//! These values are fixed by the wire format and MUST NOT be changed.

// =============================================================================
// PROTOCOL NAMES (RFC 7301 section 3.1)
// =============================================================================

/// Minimum length of a single protocol name.
pub const MIN_PROTOCOL_NAME_LEN: usize = 1;

/// Maximum length of a single protocol name (uint8 length prefix).
pub const MAX_PROTOCOL_NAME_LEN: usize = u8::MAX as usize;

// =============================================================================
// PROTOCOL NAME LIST (RFC 7301 section 3.1)
// =============================================================================

/// Size of the ProtocolNameList length prefix.
pub const LIST_LENGTH_PREFIX_SIZE: usize = 2;

/// Size of each ProtocolName length prefix.
pub const NAME_LENGTH_PREFIX_SIZE: usize = 1;

/// Maximum byte length of the list body (uint16 length prefix).
pub const MAX_PROTOCOL_LIST_LEN: usize = u16::MAX as usize;

// =============================================================================
// EXTENSION TYPES (IANA TLS ExtensionType registry)
// =============================================================================

/// Extension type: application_layer_protocol_negotiation.
pub const EXT_ALPN: u16 = 16;

/// Extension type: next_protocol_negotiation (draft, superseded by ALPN).
pub const EXT_NPN: u16 = 13172;
