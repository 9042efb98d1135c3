//! # tls-alpn
//!
//! **A**pplication-**L**ayer **P**rotocol **N**egotiation for TLS (RFC 7301).
//!
//! ALPN lets a TLS client offer an ordered list of application protocols
//! (`h2`, `http/1.1`, ...) in its ClientHello and lets the server pick one.
//! This crate provides:
//!
//! - **Codec**: bit-exact encoding and decoding of the `ProtocolNameList` structure
//! - **Negotiation**: server- or client-preference selection, compatibility checks,
//!   batch negotiation
//! - **Extension model**: a validated, deduplicated protocol list with an optional selection
//! - **Catalog**: well-known protocol identifiers with descriptions and deprecation flags
//!
//! The crate performs no I/O and holds no global state. Extension framing
//! (type and length header) and the TLS handshake itself belong to the caller.
//!
//! ## Feature Flags
//!
//! - `catalog` (default): Protocol catalog and the protocol-set manager
//! - `serde`: `Serialize`/`Deserialize` for strategies, identifiers and manager configuration
//!
//! ## Modules
//!
//! - [`core`]: Protocol identifiers, lists, constants, and error types (always included)
//! - [`codec`]: ProtocolNameList wire format
//! - [`negotiation`]: Negotiation strategies and the negotiator
//! - [`extension`]: ALPN extension model and extension type tags
//! - [`catalog`]: Well-known protocols (requires `catalog` feature)
//! - [`manager`]: Named protocol sets and configuration checks (requires `catalog` feature)
//!
//! ## Example Usage
//!
//! ```rust
//! use tls_alpn::prelude::*;
//!
//! // Client side: offer protocols
//! let offer = AlpnExtension::for_client(["h2", "http/1.1"])?;
//! let wire = offer.encode()?;
//!
//! // Server side: decode the offer and pick a protocol
//! let received = AlpnExtension::decode(&wire)?;
//! let supported = ProtocolList::try_from_names(["http/1.1", "h2"])?;
//! let selected = Negotiator::server_preference().negotiate(received.protocols(), &supported)?;
//! assert_eq!(selected, "http/1.1");
//!
//! // Server reply carries exactly the selected protocol
//! let reply = AlpnExtension::for_server(selected.as_bytes())?;
//! assert_eq!(reply.encode()?, b"\x00\x09\x08http/1.1");
//! # Ok::<(), tls_alpn::AlpnError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core module (always included)
pub mod core;

pub mod codec;
pub mod extension;
pub mod negotiation;

// Catalog and manager (feature-gated)
#[cfg(feature = "catalog")]
#[cfg_attr(docsrs, doc(cfg(feature = "catalog")))]
pub mod catalog;

#[cfg(feature = "catalog")]
#[cfg_attr(docsrs, doc(cfg(feature = "catalog")))]
pub mod manager;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{AlpnError, ErrorKind, ProtocolId, ProtocolList};
    pub use crate::extension::{AlpnExtension, ExtensionType};
    pub use crate::negotiation::{BatchPair, NegotiationStrategy, Negotiator};

    #[cfg(feature = "catalog")]
    pub use crate::manager::{AlpnManager, ManagerConfig, ProtocolSelector};
}

// Re-export commonly used items at crate root
pub use crate::core::{
    AlpnError, DecodeError, EncodeError, ErrorKind, ProtocolId, ProtocolList, Result,
};
pub use extension::{AlpnExtension, ExtensionType};
pub use negotiation::{BatchPair, NegotiationStrategy, Negotiator};

#[cfg(feature = "catalog")]
pub use manager::{AlpnManager, AlpnManagerBuilder, ManagerConfig};
