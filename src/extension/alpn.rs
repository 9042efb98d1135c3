//! The ALPN extension body for one side of a handshake.

use std::fmt;

use super::ext_type::ExtensionType;
use crate::codec;
use crate::core::{AlpnError, EncodeError, ProtocolId, ProtocolList, Result};
use crate::negotiation::Negotiator;

/// ALPN extension: supported protocols plus the optional selection.
///
/// The selected protocol, when set, is always a member of the protocol list.
/// Removing it from the list, directly or by replacing the list, clears the
/// selection.
///
/// ```rust
/// use tls_alpn::AlpnExtension;
///
/// let client = AlpnExtension::for_client(["h2", "http/1.1"])?;
/// let wire = client.encode()?;
/// assert_eq!(wire[..2], [0x00, 0x0c]);
///
/// let received = AlpnExtension::decode(&wire)?;
/// assert_eq!(received.protocols(), client.protocols());
/// # Ok::<(), tls_alpn::AlpnError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlpnExtension {
    protocols: ProtocolList,
    selected: Option<ProtocolId>,
}

impl AlpnExtension {
    /// Create an extension with no protocols.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extension from a list of names.
    ///
    /// Fails on the first empty or oversized name; duplicates are dropped.
    pub fn with_protocols<I, P>(protocols: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        Ok(Self {
            protocols: ProtocolList::try_from_names(protocols)?,
            selected: None,
        })
    }

    /// Client-side extension offering `protocols`.
    pub fn for_client<I, P>(protocols: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        Self::with_protocols(protocols)
    }

    /// Server-side extension carrying the single selected protocol.
    pub fn for_server(selected: impl AsRef<[u8]>) -> Result<Self> {
        let selected = ProtocolId::new(selected)?;
        let mut protocols = ProtocolList::new();
        protocols.push(selected.clone());
        Ok(Self {
            protocols,
            selected: Some(selected),
        })
    }

    /// Decode an extension body received from the wire.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let protocols = codec::decode(data)?;
        Ok(Self {
            protocols: protocols.into_iter().collect(),
            selected: None,
        })
    }

    /// Server-preference negotiation between two offers.
    pub fn negotiate(client: &[ProtocolId], server: &[ProtocolId]) -> Result<ProtocolId> {
        Negotiator::server_preference().negotiate(client, server)
    }

    /// Extension type tag for this body.
    pub fn extension_type(&self) -> ExtensionType {
        ExtensionType::Alpn
    }

    /// Supported protocols in preference order.
    pub fn protocols(&self) -> &ProtocolList {
        &self.protocols
    }

    /// Replace the protocol list.
    ///
    /// On error the extension is left unchanged.
    pub fn set_protocols<I, P>(&mut self, protocols: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        self.protocols = ProtocolList::try_from_names(protocols)?;
        if let Some(selected) = &self.selected {
            if !self.protocols.contains(selected) {
                self.selected = None;
            }
        }
        Ok(())
    }

    /// Append a protocol; adding one already present is a no-op.
    pub fn add_protocol(&mut self, protocol: impl AsRef<[u8]>) -> Result<&mut Self> {
        self.protocols.push(ProtocolId::new(protocol)?);
        Ok(self)
    }

    /// Remove a protocol if present.
    pub fn remove_protocol(&mut self, protocol: impl AsRef<[u8]>) -> &mut Self {
        let protocol = protocol.as_ref();
        let was_selected = self.selected.as_ref().is_some_and(|s| s == protocol);
        if self.protocols.remove(protocol) && was_selected {
            self.selected = None;
        }
        self
    }

    /// Whether `protocol` is in the list.
    pub fn has_protocol(&self, protocol: impl AsRef<[u8]>) -> bool {
        self.protocols.contains(protocol)
    }

    /// The negotiated protocol, if any.
    pub fn selected_protocol(&self) -> Option<&ProtocolId> {
        self.selected.as_ref()
    }

    /// Record the negotiated protocol.
    ///
    /// # Errors
    ///
    /// [`AlpnError::ProtocolNotFound`] unless `protocol` is in the list.
    pub fn set_selected_protocol(&mut self, protocol: impl AsRef<[u8]>) -> Result<()> {
        let protocol = protocol.as_ref();
        match self.protocols.iter().find(|p| *p == protocol) {
            Some(found) => {
                self.selected = Some(found.clone());
                Ok(())
            }
            None => Err(AlpnError::ProtocolNotFound(
                String::from_utf8_lossy(protocol).into_owned(),
            )),
        }
    }

    /// Forget the negotiated protocol.
    pub fn clear_selected_protocol(&mut self) -> &mut Self {
        self.selected = None;
        self
    }

    /// Total wire size of the encoded body.
    pub fn wire_size(&self) -> usize {
        codec::encoded_len(&self.protocols)
    }

    /// Encode to wire format
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.protocols.is_empty() {
            return Err(EncodeError::NoProtocols.into());
        }
        Ok(codec::encode(&self.protocols)?)
    }

    /// Encode into buffer, returns bytes written
    pub fn encode_into(&self, buf: &mut [u8]) -> Result<usize> {
        if self.protocols.is_empty() {
            return Err(EncodeError::NoProtocols.into());
        }
        Ok(codec::encode_into(&self.protocols, buf)?)
    }
}

impl fmt::Display for AlpnExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALPN Extension (protocols: {})", self.protocols)?;
        if let Some(selected) = &self.selected {
            write!(f, " [selected: {selected}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DecodeError, ErrorKind};

    #[test]
    fn test_new_is_empty() {
        let ext = AlpnExtension::new();
        assert!(ext.protocols().is_empty());
        assert_eq!(ext.selected_protocol(), None);
        assert_eq!(ext.extension_type(), ExtensionType::Alpn);
    }

    #[test]
    fn test_with_protocols_dedups() {
        let ext = AlpnExtension::with_protocols(["h2", "http/1.1", "h2"]).unwrap();
        assert_eq!(ext.protocols().to_string(), "h2, http/1.1");
    }

    #[test]
    fn test_with_protocols_validates() {
        assert_eq!(
            AlpnExtension::with_protocols(["h2", ""]),
            Err(AlpnError::EmptyProtocolName)
        );

        let long = "x".repeat(256);
        assert!(matches!(
            AlpnExtension::with_protocols(["h2", long.as_str()]),
            Err(AlpnError::ProtocolNameTooLong { len: 256, .. })
        ));
    }

    #[test]
    fn test_for_server() {
        let ext = AlpnExtension::for_server("h2").unwrap();
        assert_eq!(ext.protocols().len(), 1);
        assert_eq!(ext.selected_protocol().unwrap(), "h2");
        assert_eq!(
            ext.to_string(),
            "ALPN Extension (protocols: h2) [selected: h2]"
        );
    }

    #[test]
    fn test_add_and_remove() {
        let mut ext = AlpnExtension::for_client(["h2"]).unwrap();
        ext.add_protocol("h3").unwrap().add_protocol("h2").unwrap();
        assert_eq!(ext.protocols().len(), 2);

        let err = ext.add_protocol("").unwrap_err();
        assert_eq!(err, AlpnError::EmptyProtocolName);

        ext.remove_protocol("h2").remove_protocol("missing");
        assert_eq!(ext.protocols().to_string(), "h3");
        assert!(!ext.has_protocol("h2"));
    }

    #[test]
    fn test_selected_protocol_must_be_member() {
        let mut ext = AlpnExtension::for_client(["h2", "http/1.1"]).unwrap();

        let err = ext.set_selected_protocol("h3").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert_eq!(ext.selected_protocol(), None);

        ext.set_selected_protocol("http/1.1").unwrap();
        assert_eq!(ext.selected_protocol().unwrap(), "http/1.1");

        ext.clear_selected_protocol();
        assert_eq!(ext.selected_protocol(), None);
    }

    #[test]
    fn test_removing_selected_clears_it() {
        let mut ext = AlpnExtension::for_client(["h2", "http/1.1"]).unwrap();
        ext.set_selected_protocol("h2").unwrap();

        ext.remove_protocol("http/1.1");
        assert_eq!(ext.selected_protocol().unwrap(), "h2");

        ext.remove_protocol("h2");
        assert_eq!(ext.selected_protocol(), None);
    }

    #[test]
    fn test_set_protocols_keeps_selection_if_still_present() {
        let mut ext = AlpnExtension::for_client(["h2", "http/1.1"]).unwrap();
        ext.set_selected_protocol("h2").unwrap();

        ext.set_protocols(["h3", "h2"]).unwrap();
        assert_eq!(ext.selected_protocol().unwrap(), "h2");

        ext.set_protocols(["h3"]).unwrap();
        assert_eq!(ext.selected_protocol(), None);
    }

    #[test]
    fn test_set_protocols_error_leaves_list() {
        let mut ext = AlpnExtension::for_client(["h2"]).unwrap();
        assert!(ext.set_protocols(["h3", ""]).is_err());
        assert_eq!(ext.protocols().to_string(), "h2");
    }

    #[test]
    fn test_encode_requires_protocols() {
        let ext = AlpnExtension::new();
        let err = ext.encode().unwrap_err();
        assert_eq!(err, AlpnError::Encode(EncodeError::NoProtocols));

        let mut buf = [0u8; 16];
        assert!(ext.encode_into(&mut buf).is_err());
    }

    #[test]
    fn test_encode_decode() {
        let ext = AlpnExtension::for_client(["h2", "http/1.1"]).unwrap();
        let encoded = ext.encode().unwrap();
        assert_eq!(hex::encode(&encoded), "000c02683208687474702f312e31");
        assert_eq!(encoded.len(), ext.wire_size());

        let decoded = AlpnExtension::decode(&encoded).unwrap();
        assert_eq!(decoded, ext);
    }

    #[test]
    fn test_decode_dedups() {
        let data = [0x00, 0x06, 0x02, b'h', b'2', 0x02, b'h', b'2'];
        let ext = AlpnExtension::decode(&data).unwrap();
        assert_eq!(ext.protocols().len(), 1);
    }

    #[test]
    fn test_decode_errors_surface() {
        let err = AlpnExtension::decode(&[0x00, 0x01, 0x00]).unwrap_err();
        assert_eq!(
            err,
            AlpnError::Decode(DecodeError::EmptyProtocolName { offset: 2 })
        );
    }

    #[test]
    fn test_negotiate_shorthand() {
        let client = ProtocolList::try_from_names(["http/1.1", "h2"]).unwrap();
        let server = ProtocolList::try_from_names(["h2", "http/1.1"]).unwrap();
        assert_eq!(AlpnExtension::negotiate(&client, &server).unwrap(), "h2");
    }

    #[test]
    fn test_display_without_selection() {
        let ext = AlpnExtension::for_client(["h2", "http/1.1"]).unwrap();
        assert_eq!(ext.to_string(), "ALPN Extension (protocols: h2, http/1.1)");
    }
}
