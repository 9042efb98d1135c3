//! ALPN extension model
//!
//! [`AlpnExtension`] owns one side's protocol list and, once negotiation has
//! happened, the selected protocol. It is the entry point most callers use to
//! put an ALPN offer on the wire or read one back.
//!
//! [`ExtensionType`] lists the TLS extension type tags this crate knows
//! about. The tag itself is written by the caller's extension framing.

mod alpn;
mod ext_type;

pub use alpn::*;
pub use ext_type::*;
