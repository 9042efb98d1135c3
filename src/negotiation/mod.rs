//! Protocol negotiation
//!
//! Selects one mutually supported protocol from a client offer and a server
//! offer. The tie-break rule is fixed per [`Negotiator`] by its
//! [`NegotiationStrategy`]: the first match in the preferred side's order wins.
//!
//! ```rust
//! use tls_alpn::prelude::*;
//!
//! let client = ProtocolList::try_from_names(["h2", "http/1.1"])?;
//! let server = ProtocolList::try_from_names(["http/1.1", "h2"])?;
//!
//! let negotiator = Negotiator::server_preference();
//! assert_eq!(negotiator.negotiate(&client, &server)?, "http/1.1");
//!
//! let negotiator = Negotiator::client_preference();
//! assert_eq!(negotiator.negotiate(&client, &server)?, "h2");
//! # Ok::<(), tls_alpn::AlpnError>(())
//! ```

mod batch;
mod negotiator;
mod strategy;

pub use batch::*;
pub use negotiator::*;
pub use strategy::*;
