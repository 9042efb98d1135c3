//! ALPN core types, constants, and errors.
//!
//! This module provides the validated protocol identifier and list types that
//! every other layer builds on. It has no dependencies beyond the error crate.

mod constants;
mod error;
mod protocol;

pub use constants::*;
pub use error::*;
pub use protocol::*;

pub(crate) use protocol::contains;
