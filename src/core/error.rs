//! Error types for ALPN encoding, decoding, and negotiation.

use std::fmt;

use thiserror::Error;

use super::protocol::ProtocolId;

/// Errors that can occur when decoding a ProtocolNameList.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input is shorter than the list length prefix.
    #[error("data too short: expected {expected}, got {actual}")]
    TooShort {
        /// Minimum bytes required.
        expected: usize,
        /// Actual bytes available.
        actual: usize,
    },

    /// Declared list length exceeds the available bytes.
    #[error("incomplete protocol list data: declared {declared}, got {available}")]
    IncompleteList {
        /// List length from the prefix.
        declared: usize,
        /// Bytes following the prefix.
        available: usize,
    },

    /// A protocol name length byte lies outside the list.
    #[error("unexpected end of data at offset {offset}")]
    UnexpectedEnd {
        /// Offset of the missing length byte.
        offset: usize,
    },

    /// A protocol name declared a zero length.
    #[error("empty protocol name at offset {offset}")]
    EmptyProtocolName {
        /// Offset of the zero length byte.
        offset: usize,
    },

    /// A protocol name runs past the end of the list.
    #[error("incomplete protocol name data at {offset}: {declared} > {available}")]
    IncompleteName {
        /// Offset of the name's length byte.
        offset: usize,
        /// Name length from the length byte.
        declared: usize,
        /// Bytes left in the list after the length byte.
        available: usize,
    },
}

/// Errors that can occur when encoding a ProtocolNameList.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The extension holds no protocols.
    #[error("no protocols to encode")]
    NoProtocols,

    /// A protocol name does not fit a uint8 length prefix.
    #[error("protocol name too long: {len} bytes")]
    ProtocolNameTooLong {
        /// Length of the offending name.
        len: usize,
    },

    /// The list body does not fit a uint16 length prefix.
    #[error("protocol list too long: {len} bytes")]
    ListTooLong {
        /// Serialized body length.
        len: usize,
    },

    /// Output buffer is too small to hold the encoded list.
    #[error("buffer too small: required {required}, available {available}")]
    BufferTooSmall {
        /// Bytes needed.
        required: usize,
        /// Bytes provided.
        available: usize,
    },
}

/// Broad classification of an [`AlpnError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid identifiers, lists, strategy names, or batch entries.
    Validation,
    /// Malformed wire data.
    Decoding,
    /// Lists that cannot be put on the wire.
    Encoding,
    /// No protocol in common.
    NegotiationFailed,
    /// Reference to something that is not registered.
    Lookup,
}

/// Top-level ALPN errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlpnError {
    /// Protocol name is empty.
    #[error("protocol name cannot be empty")]
    EmptyProtocolName,

    /// Protocol name exceeds 255 bytes.
    #[error("protocol name \"{name}\" is too long: {len} bytes, maximum is 255")]
    ProtocolNameTooLong {
        /// Lossy rendering of the name, shortened to its first 32 characters.
        name: String,
        /// Name length in bytes.
        len: usize,
    },

    /// A protocol list is unusable as given.
    #[error("invalid protocol list: {0}")]
    InvalidProtocolList(String),

    /// Unknown negotiation strategy name.
    #[error("invalid negotiation strategy: {0}")]
    InvalidStrategy(String),

    /// A batch entry is malformed.
    #[error("invalid protocol list: {reason} at index {index}")]
    InvalidBatchPair {
        /// Position of the pair in the batch.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// Decode error.
    #[error("ALPN extension decoding error: {0}")]
    Decode(#[from] DecodeError),

    /// Encode error.
    #[error("ALPN extension encoding error: {0}")]
    Encode(#[from] EncodeError),

    /// Client and server share no protocol.
    #[error(
        "ALPN negotiation failed. client protocols: [{}], server protocols: [{}]",
        Joined(.client),
        Joined(.server)
    )]
    NegotiationFailed {
        /// Client offer.
        client: Vec<ProtocolId>,
        /// Server offer.
        server: Vec<ProtocolId>,
    },

    /// Protocol is not in the extension's negotiated list.
    #[error("protocol \"{0}\" not found in negotiated protocols")]
    ProtocolNotFound(String),

    /// Named protocol set is not registered.
    #[error("protocol set '{0}' not found")]
    ProtocolSetNotFound(String),

    /// Extension type value is not registered.
    #[error("unknown extension type: {0}")]
    UnknownExtensionType(u16),
}

impl AlpnError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyProtocolName
            | Self::ProtocolNameTooLong { .. }
            | Self::InvalidProtocolList(_)
            | Self::InvalidStrategy(_)
            | Self::InvalidBatchPair { .. } => ErrorKind::Validation,
            Self::Decode(_) => ErrorKind::Decoding,
            Self::Encode(_) => ErrorKind::Encoding,
            Self::NegotiationFailed { .. } => ErrorKind::NegotiationFailed,
            Self::ProtocolNotFound(_)
            | Self::ProtocolSetNotFound(_)
            | Self::UnknownExtensionType(_) => ErrorKind::Lookup,
        }
    }

    pub(crate) fn name_too_long(name: &[u8]) -> Self {
        Self::ProtocolNameTooLong {
            name: truncated(&String::from_utf8_lossy(name)),
            len: name.len(),
        }
    }

    pub(crate) fn negotiation_failed(client: &[ProtocolId], server: &[ProtocolId]) -> Self {
        Self::NegotiationFailed {
            client: client.to_vec(),
            server: server.to_vec(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AlpnError>;

struct Joined<'a>(&'a [ProtocolId]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, protocol) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{protocol}")?;
        }
        Ok(())
    }
}

/// Shorten long names for error messages.
fn truncated(name: &str) -> String {
    const SHOWN: usize = 32;
    match name.char_indices().nth(SHOWN) {
        Some((idx, _)) => format!("{}...", &name[..idx]),
        None => name.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<ProtocolId> {
        names.iter().map(|n| ProtocolId::new(*n).unwrap()).collect()
    }

    #[test]
    fn test_negotiation_failed_message() {
        let err = AlpnError::negotiation_failed(
            &ids(&["http/1.1", "h2"]),
            &ids(&["grpc"]),
        );
        assert_eq!(
            err.to_string(),
            "ALPN negotiation failed. client protocols: [http/1.1, h2], server protocols: [grpc]"
        );
        assert_eq!(err.kind(), ErrorKind::NegotiationFailed);
    }

    #[test]
    fn test_decode_error_wraps() {
        let err: AlpnError = DecodeError::EmptyProtocolName { offset: 2 }.into();
        assert_eq!(err.kind(), ErrorKind::Decoding);
        assert!(err.to_string().contains("empty protocol name"));
    }

    #[test]
    fn test_encode_error_wraps() {
        let err: AlpnError = EncodeError::NoProtocols.into();
        assert_eq!(err.kind(), ErrorKind::Encoding);
        assert_eq!(
            err.to_string(),
            "ALPN extension encoding error: no protocols to encode"
        );
    }

    #[test]
    fn test_name_too_long_is_truncated() {
        let err = AlpnError::name_too_long(&[b'a'; 300]);
        let msg = err.to_string();
        assert!(msg.contains("300 bytes"));
        assert!(msg.contains("maximum is 255"));
        assert!(msg.len() < 120);
        assert!(msg.contains(&format!("\"{}...\"", "a".repeat(32))));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_lookup_kinds() {
        assert_eq!(
            AlpnError::ProtocolSetNotFound("x".into()).kind(),
            ErrorKind::Lookup
        );
        assert_eq!(AlpnError::UnknownExtensionType(1).kind(), ErrorKind::Lookup);

        let err = AlpnError::ProtocolNotFound("h2".into());
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert_eq!(
            err.to_string(),
            "protocol \"h2\" not found in negotiated protocols"
        );
    }
}
