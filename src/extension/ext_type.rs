//! TLS extension type tags.

use std::fmt;

use crate::core::{AlpnError, EXT_ALPN, EXT_NPN};

/// Extension types related to application protocol negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum ExtensionType {
    /// Application-Layer Protocol Negotiation (RFC 7301)
    Alpn = EXT_ALPN,

    /// Next Protocol Negotiation, the draft ALPN replaced
    Npn = EXT_NPN,
}

impl ExtensionType {
    /// All known extension types.
    pub const ALL: [Self; 2] = [Self::Alpn, Self::Npn];

    /// All known extension types, ALPN first.
    pub fn all() -> [Self; 2] {
        Self::ALL
    }

    /// Wire value of the tag.
    pub fn value(self) -> u16 {
        self as u16
    }

    /// Convert from wire value
    pub fn from_value(value: u16) -> Option<Self> {
        match value {
            EXT_ALPN => Some(Self::Alpn),
            EXT_NPN => Some(Self::Npn),
            _ => None,
        }
    }

    /// Registry name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Alpn => "application_layer_protocol_negotiation",
            Self::Npn => "next_protocol_negotiation",
        }
    }

    /// Human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Alpn => "Application-Layer Protocol Negotiation (RFC 7301)",
            Self::Npn => "Next Protocol Negotiation (deprecated)",
        }
    }

    /// Display label; same as the description.
    pub fn label(self) -> &'static str {
        self.description()
    }

    /// Whether the extension is obsolete.
    pub fn is_deprecated(self) -> bool {
        matches!(self, Self::Npn)
    }
}

impl TryFrom<u16> for ExtensionType {
    type Error = AlpnError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(AlpnError::UnknownExtensionType(value))
    }
}

impl From<ExtensionType> for u16 {
    fn from(ext: ExtensionType) -> Self {
        ext.value()
    }
}

impl fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
