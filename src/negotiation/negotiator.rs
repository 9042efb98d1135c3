//! Strategy-driven protocol selection.

use tracing::debug;

use super::strategy::NegotiationStrategy;
use crate::core::{AlpnError, ProtocolId, Result, contains};

/// Selects a protocol from client and server offers.
///
/// Holds nothing but its strategy; every call is a pure function of the
/// strategy and the arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Negotiator {
    strategy: NegotiationStrategy,
}

impl Negotiator {
    /// Create a negotiator with the given strategy.
    pub fn new(strategy: NegotiationStrategy) -> Self {
        Self { strategy }
    }

    /// Negotiator that honors the server's order.
    pub fn server_preference() -> Self {
        Self::new(NegotiationStrategy::ServerPreference)
    }

    /// Negotiator that honors the client's order.
    pub fn client_preference() -> Self {
        Self::new(NegotiationStrategy::ClientPreference)
    }

    /// Current strategy.
    pub fn strategy(&self) -> NegotiationStrategy {
        self.strategy
    }

    /// Replace the strategy.
    pub fn set_strategy(&mut self, strategy: NegotiationStrategy) {
        self.strategy = strategy;
    }

    /// Pick one protocol both sides support.
    ///
    /// # Errors
    ///
    /// - [`AlpnError::InvalidProtocolList`] if either list is empty
    /// - [`AlpnError::NegotiationFailed`] if there is no common protocol
    pub fn negotiate(&self, client: &[ProtocolId], server: &[ProtocolId]) -> Result<ProtocolId> {
        if client.is_empty() {
            return Err(AlpnError::InvalidProtocolList(
                "client protocols cannot be empty".into(),
            ));
        }
        if server.is_empty() {
            return Err(AlpnError::InvalidProtocolList(
                "server protocols cannot be empty".into(),
            ));
        }

        let (preferred, other) = match self.strategy {
            NegotiationStrategy::ServerPreference => (server, client),
            NegotiationStrategy::ClientPreference => (client, server),
        };

        match preferred.iter().find(|p| contains(other, p.as_bytes())) {
            Some(selected) => {
                debug!(strategy = %self.strategy, %selected, "ALPN negotiated");
                Ok(selected.clone())
            }
            None => {
                debug!(
                    strategy = %self.strategy,
                    client = client.len(),
                    server = server.len(),
                    "ALPN negotiation found no common protocol"
                );
                Err(AlpnError::negotiation_failed(client, server))
            }
        }
    }

    /// Whether the two lists share at least one protocol.
    pub fn is_compatible(&self, client: &[ProtocolId], server: &[ProtocolId]) -> bool {
        client.iter().any(|p| contains(server, p.as_bytes()))
    }

    /// Every protocol present in both lists, in client order.
    pub fn common_protocols(
        &self,
        client: &[ProtocolId],
        server: &[ProtocolId],
    ) -> Vec<ProtocolId> {
        client
            .iter()
            .filter(|p| contains(server, p.as_bytes()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    fn ids(names: &[&str]) -> Vec<ProtocolId> {
        names.iter().map(|n| ProtocolId::new(n).unwrap()).collect()
    }

    #[test]
    fn test_server_preference() {
        let negotiator = Negotiator::server_preference();
        let selected = negotiator
            .negotiate(&ids(&["a", "b", "c"]), &ids(&["c", "b", "a"]))
            .unwrap();
        assert_eq!(selected, "c");
    }

    #[test]
    fn test_client_preference() {
        let negotiator = Negotiator::client_preference();
        let selected = negotiator
            .negotiate(&ids(&["a", "b", "c"]), &ids(&["c", "b", "a"]))
            .unwrap();
        assert_eq!(selected, "a");
    }

    #[test]
    fn test_single_common_protocol_agrees() {
        let client = ids(&["x", "b", "y"]);
        let server = ids(&["z", "b", "w"]);

        for negotiator in [
            Negotiator::server_preference(),
            Negotiator::client_preference(),
        ] {
            assert_eq!(negotiator.negotiate(&client, &server).unwrap(), "b");
        }
    }

    #[test]
    fn test_no_common_protocol() {
        let client = ids(&["http/1.1", "h2"]);
        let server = ids(&["grpc", "h3"]);

        for negotiator in [
            Negotiator::server_preference(),
            Negotiator::client_preference(),
        ] {
            let err = negotiator.negotiate(&client, &server).unwrap_err();
            assert_eq!(
                err,
                AlpnError::NegotiationFailed {
                    client: client.clone(),
                    server: server.clone()
                }
            );
        }
    }

    #[test]
    fn test_empty_lists_rejected() {
        let negotiator = Negotiator::default();
        let some = ids(&["h2"]);

        let err = negotiator.negotiate(&[], &some).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("client protocols cannot be empty"));

        let err = negotiator.negotiate(&some, &[]).unwrap_err();
        assert!(err.to_string().contains("server protocols cannot be empty"));
    }

    #[test]
    fn test_exact_byte_match() {
        let negotiator = Negotiator::default();
        let result = negotiator.negotiate(&ids(&["H2"]), &ids(&["h2"]));
        assert!(matches!(result, Err(AlpnError::NegotiationFailed { .. })));
    }

    #[test]
    fn test_is_compatible() {
        let negotiator = Negotiator::default();
        let client = ids(&["h2", "http/1.1"]);
        assert!(negotiator.is_compatible(&client, &ids(&["http/1.1"])));
        assert!(!negotiator.is_compatible(&ids(&["h2"]), &ids(&["h3"])));
        assert!(!negotiator.is_compatible(&[], &ids(&["h3"])));
    }

    #[test]
    fn test_common_protocols_client_order() {
        let negotiator = Negotiator::server_preference();
        let client = ids(&["a", "b", "c", "d"]);
        let server = ids(&["d", "b", "e", "f"]);
        let common = negotiator.common_protocols(&client, &server);
        assert_eq!(common, ids(&["b", "d"]));
    }

    #[test]
    fn test_set_strategy() {
        let mut negotiator = Negotiator::default();
        assert_eq!(negotiator, Negotiator::server_preference());

        negotiator.set_strategy(NegotiationStrategy::ClientPreference);
        let strategy = negotiator.strategy();
        assert_eq!(strategy, NegotiationStrategy::ClientPreference);
        assert_eq!(negotiator, Negotiator::client_preference());
    }
}
