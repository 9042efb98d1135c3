//! Negotiation strategies.

use std::fmt;
use std::str::FromStr;

use crate::core::AlpnError;

/// Whose preference order decides when several protocols are in common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NegotiationStrategy {
    /// Scan the server list; pick the first entry the client also offers.
    /// This is the behavior RFC 7301 describes for servers.
    #[default]
    ServerPreference,

    /// Scan the client list; pick the first entry the server also supports.
    ClientPreference,
}

impl NegotiationStrategy {
    /// Configuration name of the strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ServerPreference => "server_preference",
            Self::ClientPreference => "client_preference",
        }
    }
}

impl fmt::Display for NegotiationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NegotiationStrategy {
    type Err = AlpnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "server_preference" => Ok(Self::ServerPreference),
            "client_preference" => Ok(Self::ClientPreference),
            other => Err(AlpnError::InvalidStrategy(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names() {
        for strategy in [
            NegotiationStrategy::ServerPreference,
            NegotiationStrategy::ClientPreference,
        ] {
            let parsed = strategy.as_str().parse::<NegotiationStrategy>();
            assert_eq!(parsed, Ok(strategy));
        }
    }

    #[test]
    fn test_strategy_default() {
        assert_eq!(
            NegotiationStrategy::default(),
            NegotiationStrategy::ServerPreference
        );
    }

    #[test]
    fn test_strategy_invalid() {
        let err = "random".parse::<NegotiationStrategy>().unwrap_err();
        assert_eq!(err, AlpnError::InvalidStrategy("random".into()));
        assert_eq!(err.to_string(), "invalid negotiation strategy: random");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_strategy_serde() {
        let json = serde_json::to_string(&NegotiationStrategy::ClientPreference).unwrap();
        assert_eq!(json, "\"client_preference\"");

        let parsed: NegotiationStrategy = serde_json::from_str("\"server_preference\"").unwrap();
        assert_eq!(parsed, NegotiationStrategy::ServerPreference);
    }
}
