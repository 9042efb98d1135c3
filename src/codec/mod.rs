//! ProtocolNameList codec
//!
//! Bidirectional mapping between a protocol list and the RFC 7301 wire
//! structure carried inside the ALPN extension.
//!
//! Wire format (big-endian):
//! ```text
//! +0   ProtocolNameList length (2 bytes BE16)
//! +2   ProtocolName length (1 byte, > 0)
//! +3   ProtocolName (variable)
//!      ... repeated until the list length is consumed
//! ```
//!
//! The extension type and length header (RFC 6066 framing) is not part of
//! this structure and is left to the caller.

mod decode;
mod encode;

pub use decode::*;
pub use encode::*;
