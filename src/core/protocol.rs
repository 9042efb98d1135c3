//! Protocol identifiers and ordered protocol lists.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use super::constants::MAX_PROTOCOL_NAME_LEN;
use super::error::{AlpnError, Result};

/// A validated ALPN protocol identifier.
///
/// An opaque byte string between 1 and 255 bytes long, e.g. `h2` or
/// `http/1.1`. No text encoding is enforced; [`Display`](fmt::Display)
/// renders the bytes lossily as UTF-8.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProtocolId(Box<[u8]>);

impl ProtocolId {
    /// Validate and wrap a protocol name.
    pub fn new(name: impl AsRef<[u8]>) -> Result<Self> {
        let name = name.as_ref();
        Self::validate(name)?;
        Ok(Self(name.into()))
    }

    /// Check that `name` is a legal protocol identifier.
    pub fn validate(name: &[u8]) -> Result<()> {
        if name.is_empty() {
            return Err(AlpnError::EmptyProtocolName);
        }
        if name.len() > MAX_PROTOCOL_NAME_LEN {
            return Err(AlpnError::name_too_long(name));
        }
        Ok(())
    }

    /// Wrap bytes already bounded by a non-zero uint8 length prefix.
    pub(crate) fn from_wire(name: &[u8]) -> Self {
        debug_assert!(!name.is_empty() && name.len() <= MAX_PROTOCOL_NAME_LEN);
        Self(name.into())
    }

    /// Raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The identifier as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Length in bytes (always 1..=255).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Consume into the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_vec()
    }
}

impl fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => f.debug_tuple("ProtocolId").field(&s).finish(),
            None => f.debug_tuple("ProtocolId").field(&&self.0[..]).finish(),
        }
    }
}

impl AsRef<[u8]> for ProtocolId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for ProtocolId {
    type Err = AlpnError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ProtocolId {
    type Error = AlpnError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&[u8]> for ProtocolId {
    type Error = AlpnError;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<Vec<u8>> for ProtocolId {
    type Error = AlpnError;

    fn try_from(value: Vec<u8>) -> Result<Self> {
        Self::validate(&value)?;
        Ok(Self(value.into_boxed_slice()))
    }
}

impl TryFrom<String> for ProtocolId {
    type Error = AlpnError;

    fn try_from(value: String) -> Result<Self> {
        Self::try_from(value.into_bytes())
    }
}

impl PartialEq<[u8]> for ProtocolId {
    fn eq(&self, other: &[u8]) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<str> for ProtocolId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for ProtocolId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == other.as_bytes()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{self, SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{MAX_PROTOCOL_NAME_LEN, ProtocolId};

    /// Text identifiers serialize as strings, anything else as bytes.
    impl Serialize for ProtocolId {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self.as_str() {
                Some(name) => serializer.serialize_str(name),
                None => serializer.serialize_bytes(self.as_bytes()),
            }
        }
    }

    /// Accepts either serialized form.
    impl<'de> Deserialize<'de> for ProtocolId {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_bytes(ProtocolIdVisitor)
        }
    }

    struct ProtocolIdVisitor;

    impl<'de> Visitor<'de> for ProtocolIdVisitor {
        type Value = ProtocolId;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a protocol name as a string or byte sequence")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<ProtocolId, E> {
            self.visit_bytes(v.as_bytes())
        }

        fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<ProtocolId, E> {
            ProtocolId::new(v).map_err(E::custom)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<ProtocolId, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let hint = seq.size_hint().unwrap_or(0);
            let mut bytes = Vec::with_capacity(hint.min(MAX_PROTOCOL_NAME_LEN));
            while let Some(byte) = seq.next_element::<u8>()? {
                bytes.push(byte);
            }
            ProtocolId::try_from(bytes).map_err(de::Error::custom)
        }
    }
}

/// Ordered list of unique protocol identifiers.
///
/// Insertion order is preserved and duplicates collapse to their first
/// occurrence. The list derefs to `[ProtocolId]` for read access; all
/// mutation goes through [`push`](Self::push) and [`remove`](Self::remove).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProtocolList {
    protocols: Vec<ProtocolId>,
}

impl ProtocolList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every name and build a deduplicated list.
    ///
    /// Fails on the first empty or oversized name.
    pub fn try_from_names<I, P>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let mut list = Self::new();
        for name in names {
            list.push(ProtocolId::new(name)?);
        }
        Ok(list)
    }

    /// Append `protocol` unless already present. Returns whether it was added.
    pub fn push(&mut self, protocol: ProtocolId) -> bool {
        if self.contains(&protocol) {
            return false;
        }
        self.protocols.push(protocol);
        true
    }

    /// Remove `protocol` if present. Returns whether it was removed.
    pub fn remove(&mut self, protocol: impl AsRef<[u8]>) -> bool {
        let protocol = protocol.as_ref();
        match self.protocols.iter().position(|p| p == protocol) {
            Some(pos) => {
                self.protocols.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Exact byte-match membership test.
    pub fn contains(&self, protocol: impl AsRef<[u8]>) -> bool {
        contains(&self.protocols, protocol.as_ref())
    }

    /// Read-only view of the identifiers.
    pub fn as_slice(&self) -> &[ProtocolId] {
        &self.protocols
    }

    /// Consume into the identifiers.
    pub fn into_vec(self) -> Vec<ProtocolId> {
        self.protocols
    }

    /// Remove every protocol.
    pub fn clear(&mut self) {
        self.protocols.clear();
    }
}

pub(crate) fn contains(protocols: &[ProtocolId], protocol: &[u8]) -> bool {
    protocols.iter().any(|p| p == protocol)
}

impl Deref for ProtocolList {
    type Target = [ProtocolId];

    fn deref(&self) -> &[ProtocolId] {
        &self.protocols
    }
}

impl AsRef<[ProtocolId]> for ProtocolList {
    fn as_ref(&self) -> &[ProtocolId] {
        &self.protocols
    }
}

impl FromIterator<ProtocolId> for ProtocolList {
    fn from_iter<T: IntoIterator<Item = ProtocolId>>(iter: T) -> Self {
        let mut list = Self::new();
        for protocol in iter {
            list.push(protocol);
        }
        list
    }
}

impl Extend<ProtocolId> for ProtocolList {
    fn extend<T: IntoIterator<Item = ProtocolId>>(&mut self, iter: T) {
        for protocol in iter {
            self.push(protocol);
        }
    }
}

impl IntoIterator for ProtocolList {
    type Item = ProtocolId;
    type IntoIter = std::vec::IntoIter<ProtocolId>;

    fn into_iter(self) -> Self::IntoIter {
        self.protocols.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProtocolList {
    type Item = &'a ProtocolId;
    type IntoIter = std::slice::Iter<'a, ProtocolId>;

    fn into_iter(self) -> Self::IntoIter {
        self.protocols.iter()
    }
}

impl fmt::Display for ProtocolList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, protocol) in self.protocols.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{protocol}")?;
        }
        Ok(())
    }
}
