//! Protocol-set management
//!
//! [`AlpnManager`] keeps named protocol sets next to a [`Negotiator`] so
//! callers can build extensions and negotiate by set name (`"web"`,
//! `"modern"`, ...) instead of spelling out lists. It also offers advisory
//! checks of a protocol configuration against the [`catalog`](crate::catalog).
//!
//! [`Negotiator`]: crate::negotiation::Negotiator

mod analysis;
mod config;
mod registry;

pub use analysis::*;
pub use config::*;
pub use registry::*;
