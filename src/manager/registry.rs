//! Named protocol sets and set-aware negotiation.

use tracing::debug;

use super::config::{ManagerConfig, ProtocolSetConfig};
use crate::catalog::{self, protocols::*};
use crate::core::{AlpnError, ProtocolId, ProtocolList, Result};
use crate::extension::AlpnExtension;
use crate::negotiation::{NegotiationStrategy, Negotiator};

/// Either a registered set name or an explicit protocol list.
#[derive(Debug, Clone, Copy)]
pub enum ProtocolSelector<'a> {
    /// Name of a registered protocol set.
    Set(&'a str),
    /// Explicit protocols.
    List(&'a [ProtocolId]),
}

impl<'a> From<&'a str> for ProtocolSelector<'a> {
    fn from(name: &'a str) -> Self {
        Self::Set(name)
    }
}

impl<'a> From<&'a String> for ProtocolSelector<'a> {
    fn from(name: &'a String) -> Self {
        Self::Set(name)
    }
}

impl<'a> From<&'a [ProtocolId]> for ProtocolSelector<'a> {
    fn from(list: &'a [ProtocolId]) -> Self {
        Self::List(list)
    }
}

impl<'a> From<&'a Vec<ProtocolId>> for ProtocolSelector<'a> {
    fn from(list: &'a Vec<ProtocolId>) -> Self {
        Self::List(list)
    }
}

impl<'a> From<&'a ProtocolList> for ProtocolSelector<'a> {
    fn from(list: &'a ProtocolList) -> Self {
        Self::List(list)
    }
}

/// Suggested protocol lists for common deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendedConfigurations {
    /// Browsers and web servers.
    pub web: &'static [&'static str],
    /// API backends, including gRPC.
    pub api: &'static [&'static str],
    /// Modern-only deployments.
    pub secure: &'static [&'static str],
}

/// Registry of named protocol sets plus a negotiator.
#[derive(Debug, Clone)]
pub struct AlpnManager {
    negotiator: Negotiator,
    sets: Vec<(String, ProtocolList)>,
}

impl Default for AlpnManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AlpnManager {
    /// Manager with a server-preference negotiator and the default sets.
    pub fn new() -> Self {
        Self::with_negotiator(Negotiator::default())
    }

    /// Manager with the given negotiator and the default sets.
    pub fn with_negotiator(negotiator: Negotiator) -> Self {
        Self {
            negotiator,
            sets: default_sets(),
        }
    }

    /// Create a new manager builder.
    pub fn builder() -> AlpnManagerBuilder {
        AlpnManagerBuilder::new()
    }

    /// Build a manager from configuration.
    ///
    /// Fails if any configured set contains an invalid protocol name.
    pub fn from_config(config: &ManagerConfig) -> Result<Self> {
        let mut manager = Self {
            negotiator: Negotiator::new(config.strategy),
            sets: if config.include_default_sets {
                default_sets()
            } else {
                Vec::new()
            },
        };
        for set in &config.protocol_sets {
            manager.register_protocol_set(set.name.clone(), &set.protocols)?;
        }
        Ok(manager)
    }

    /// Preset for web servers: the default sets.
    pub fn web_configuration() -> Self {
        Self::new()
    }

    /// Preset for API servers: adds a `default` set of `h2`, `grpc`, `http/1.1`.
    pub fn api_configuration() -> Self {
        let mut manager = Self::new();
        let default = known_list(&[HTTP_2, GRPC, HTTP_1_1]);
        manager.sets.push(("default".to_owned(), default));
        manager
    }

    /// Register (or replace) a named set.
    ///
    /// Names are validated and deduplicated like any protocol list.
    pub fn register_protocol_set<I, P>(
        &mut self,
        name: impl Into<String>,
        protocols: I,
    ) -> Result<&mut Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let name = name.into();
        let list = ProtocolList::try_from_names(protocols)?;
        debug!(set = %name, protocols = %list, "registered protocol set");

        match self.sets.iter().position(|(n, _)| *n == name) {
            Some(pos) => self.sets[pos].1 = list,
            None => self.sets.push((name, list)),
        }
        Ok(self)
    }

    /// Registered set names, in registration order.
    pub fn protocol_set_names(&self) -> Vec<&str> {
        self.sets.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Whether a set with this name exists.
    pub fn has_protocol_set(&self, name: &str) -> bool {
        self.sets.iter().any(|(existing, _)| existing == name)
    }

    /// Remove a set; unknown names are ignored.
    pub fn remove_protocol_set(&mut self, name: &str) -> &mut Self {
        self.sets.retain(|(existing, _)| existing != name);
        self
    }

    /// Protocols of a named set.
    ///
    /// # Errors
    ///
    /// [`AlpnError::ProtocolSetNotFound`] if no such set is registered.
    pub fn protocol_set(&self, name: &str) -> Result<&ProtocolList> {
        self.sets
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, list)| list)
            .ok_or_else(|| AlpnError::ProtocolSetNotFound(name.to_owned()))
    }

    fn resolve<'a>(&'a self, selector: ProtocolSelector<'a>) -> Result<&'a [ProtocolId]> {
        match selector {
            ProtocolSelector::Set(name) => self.protocol_set(name).map(|list| list.as_slice()),
            ProtocolSelector::List(list) => Ok(list),
        }
    }

    /// Build an extension from a set name or explicit list.
    pub fn create_extension<'a>(
        &'a self,
        protocols: impl Into<ProtocolSelector<'a>>,
    ) -> Result<AlpnExtension> {
        let list = self.resolve(protocols.into())?;
        AlpnExtension::with_protocols(list)
    }

    /// Negotiate between two sides, each a set name or explicit list.
    pub fn negotiate<'a>(
        &'a self,
        client: impl Into<ProtocolSelector<'a>>,
        server: impl Into<ProtocolSelector<'a>>,
    ) -> Result<ProtocolId> {
        let client = self.resolve(client.into())?;
        let server = self.resolve(server.into())?;
        self.negotiator.negotiate(client, server)
    }

    /// Whether two sides share a protocol; set names must be registered.
    pub fn is_compatible<'a>(
        &'a self,
        client: impl Into<ProtocolSelector<'a>>,
        server: impl Into<ProtocolSelector<'a>>,
    ) -> Result<bool> {
        let client = self.resolve(client.into())?;
        let server = self.resolve(server.into())?;
        Ok(self.negotiator.is_compatible(client, server))
    }

    /// The negotiator in use.
    pub fn negotiator(&self) -> &Negotiator {
        &self.negotiator
    }

    /// Replace the negotiator.
    pub fn set_negotiator(&mut self, negotiator: Negotiator) {
        self.negotiator = negotiator;
    }

    /// Suggested protocol lists.
    pub fn recommended_configurations() -> RecommendedConfigurations {
        RecommendedConfigurations {
            web: &[HTTP_2, HTTP_1_1],
            api: &[HTTP_2, GRPC, HTTP_1_1],
            secure: &[HTTP_3, HTTP_2],
        }
    }
}

/// Builder for creating an `AlpnManager`.
#[derive(Debug, Default)]
pub struct AlpnManagerBuilder {
    config: ManagerConfig,
}

impl AlpnManagerBuilder {
    /// Create a new manager builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the negotiation strategy.
    pub fn strategy(mut self, strategy: NegotiationStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Skip the built-in sets.
    pub fn without_default_sets(mut self) -> Self {
        self.config.include_default_sets = false;
        self
    }

    /// Add a named set.
    pub fn protocol_set<I, P>(mut self, name: impl Into<String>, protocols: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.config.protocol_sets.push(ProtocolSetConfig {
            name: name.into(),
            protocols: protocols.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Build the manager.
    pub fn build(self) -> Result<AlpnManager> {
        AlpnManager::from_config(&self.config)
    }
}

fn known_list(names: &[&str]) -> ProtocolList {
    names
        .iter()
        .map(|n| ProtocolId::from_wire(n.as_bytes()))
        .collect()
}

fn default_sets() -> Vec<(String, ProtocolList)> {
    let http: Vec<_> = catalog::http_protocols().collect();
    let email: Vec<_> = catalog::email_protocols().collect();
    let all: Vec<_> = catalog::all_protocols().collect();

    vec![
        ("web".to_owned(), known_list(&http)),
        ("email".to_owned(), known_list(&email)),
        ("all".to_owned(), known_list(&all)),
        (
            "modern".to_owned(),
            known_list(&[HTTP_2, HTTP_3, GRPC, WEBSOCKET]),
        ),
    ]
}
