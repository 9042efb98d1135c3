//! Batch negotiation over many client/server pairs.

use tracing::debug;

use super::negotiator::Negotiator;
use crate::core::{AlpnError, ProtocolId, Result};

/// One client/server pairing in a batch.
///
/// Sides are raw names; they are validated when the batch runs. A side left
/// as `None` makes the whole batch fail validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchPair {
    /// Client offer.
    pub client: Option<Vec<Vec<u8>>>,
    /// Server offer.
    pub server: Option<Vec<Vec<u8>>>,
}

impl BatchPair {
    /// Create a pair with both sides present.
    pub fn new<C, S, P, Q>(client: C, server: S) -> Self
    where
        C: IntoIterator<Item = P>,
        S: IntoIterator<Item = Q>,
        P: AsRef<[u8]>,
        Q: AsRef<[u8]>,
    {
        Self {
            client: Some(client.into_iter().map(|p| p.as_ref().to_vec()).collect()),
            server: Some(server.into_iter().map(|p| p.as_ref().to_vec()).collect()),
        }
    }

    fn validate(&self, index: usize) -> Result<(Vec<ProtocolId>, Vec<ProtocolId>)> {
        let (Some(client), Some(server)) = (&self.client, &self.server) else {
            return Err(AlpnError::InvalidBatchPair {
                index,
                reason: "missing client or server protocols".into(),
            });
        };

        Ok((
            validate_side(client, "client", index)?,
            validate_side(server, "server", index)?,
        ))
    }
}

fn validate_side(names: &[Vec<u8>], side: &str, index: usize) -> Result<Vec<ProtocolId>> {
    names
        .iter()
        .map(|name| {
            ProtocolId::new(name).map_err(|err| AlpnError::InvalidBatchPair {
                index,
                reason: format!("invalid {side} protocol ({err})"),
            })
        })
        .collect()
}

impl Negotiator {
    /// Negotiate every pair in order.
    ///
    /// All pairs are validated before any negotiation runs. Negotiation then
    /// stops at the first pair that fails; no partial results are returned.
    ///
    /// # Errors
    ///
    /// - [`AlpnError::InvalidBatchPair`] for the first malformed pair
    /// - [`AlpnError::NegotiationFailed`] for the first pair that cannot agree
    pub fn negotiate_batch(&self, pairs: &[BatchPair]) -> Result<Vec<ProtocolId>> {
        let validated = pairs
            .iter()
            .enumerate()
            .map(|(index, pair)| pair.validate(index))
            .collect::<Result<Vec<_>>>()?;

        let mut results = Vec::with_capacity(validated.len());
        for (index, (client, server)) in validated.iter().enumerate() {
            match self.negotiate(client, server) {
                Ok(selected) => results.push(selected),
                Err(err) => {
                    debug!(index, %err, "batch negotiation aborted");
                    return Err(AlpnError::negotiation_failed(client, server));
                }
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn test_batch_all_match() {
        let negotiator = Negotiator::server_preference();
        let pairs = [
            BatchPair::new(["h2", "http/1.1"], ["http/1.1", "h2"]),
            BatchPair::new(["grpc"], ["grpc", "h2"]),
        ];

        let results = negotiator.negotiate_batch(&pairs).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], "http/1.1");
        assert_eq!(results[1], "grpc");
    }

    #[test]
    fn test_batch_empty() {
        let negotiator = Negotiator::default();
        assert!(negotiator.negotiate_batch(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_batch_fail_fast() {
        let negotiator = Negotiator::default();
        let pairs = [
            BatchPair::new(["h2"], ["h2"]),
            BatchPair::new(["http/1.1"], ["h3"]),
            BatchPair::new(["h2"], ["h2"]),
        ];

        let err = negotiator.negotiate_batch(&pairs).unwrap_err();
        match err {
            AlpnError::NegotiationFailed { client, server } => {
                assert_eq!(client[0], "http/1.1");
                assert_eq!(server[0], "h3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_batch_empty_side_is_negotiation_failure() {
        let negotiator = Negotiator::default();
        let pairs = [BatchPair::new(Vec::<&str>::new(), ["h2"])];

        let err = negotiator.negotiate_batch(&pairs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NegotiationFailed);
    }

    #[test]
    fn test_batch_missing_side() {
        let negotiator = Negotiator::default();
        let pairs = [
            BatchPair::new(["h2"], ["h2"]),
            BatchPair {
                client: Some(vec![b"h2".to_vec()]),
                server: None,
            },
        ];

        let err = negotiator.negotiate_batch(&pairs).unwrap_err();
        assert_eq!(
            err,
            AlpnError::InvalidBatchPair {
                index: 1,
                reason: "missing client or server protocols".into()
            }
        );
    }

    #[test]
    fn test_batch_invalid_entry_checked_before_negotiation() {
        let negotiator = Negotiator::default();
        let pairs = [
            BatchPair::new(["h2"], ["h3"]),
            BatchPair::new(["h2"], ["", "h3"]),
        ];

        let err = negotiator.negotiate_batch(&pairs).unwrap_err();
        assert!(matches!(err, AlpnError::InvalidBatchPair { index: 1, .. }));
        assert!(err.to_string().contains("invalid server protocol"));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
