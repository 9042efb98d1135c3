//! Manager configuration.

use crate::negotiation::NegotiationStrategy;

/// A named protocol set to register.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtocolSetConfig {
    /// Set name.
    pub name: String,
    /// Protocols in preference order.
    pub protocols: Vec<String>,
}

/// Configuration for an [`AlpnManager`](super::AlpnManager).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ManagerConfig {
    /// Negotiation strategy.
    pub strategy: NegotiationStrategy,

    /// Start with the built-in `web`, `email`, `all` and `modern` sets.
    pub include_default_sets: bool,

    /// Additional sets, registered in order after the defaults. A set with a
    /// default's name replaces it.
    pub protocol_sets: Vec<ProtocolSetConfig>,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            strategy: NegotiationStrategy::ServerPreference,
            include_default_sets: true,
            protocol_sets: Vec::new(),
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "strategy": "client_preference",
            "protocol_sets": [
                { "name": "edge", "protocols": ["h3", "h2"] }
            ]
        }"#;

        let config: ManagerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.strategy, NegotiationStrategy::ClientPreference);
        assert!(config.include_default_sets);
        assert_eq!(config.protocol_sets[0].name, "edge");
        assert_eq!(config.protocol_sets[0].protocols, ["h3", "h2"]);
    }

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config: ManagerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ManagerConfig::default());
    }
}
