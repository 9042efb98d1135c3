//! ProtocolNameList encoding.

use tracing::trace;

use crate::core::{
    EncodeError, LIST_LENGTH_PREFIX_SIZE, MAX_PROTOCOL_LIST_LEN, MAX_PROTOCOL_NAME_LEN,
    NAME_LENGTH_PREFIX_SIZE, ProtocolId,
};

/// Byte length of the list body (everything after the uint16 prefix).
pub fn body_len(protocols: &[ProtocolId]) -> usize {
    protocols
        .iter()
        .map(|p| NAME_LENGTH_PREFIX_SIZE + p.len())
        .sum()
}

/// Total wire size, including the uint16 list length prefix.
pub fn encoded_len(protocols: &[ProtocolId]) -> usize {
    LIST_LENGTH_PREFIX_SIZE + body_len(protocols)
}

fn checked_body_len(protocols: &[ProtocolId]) -> Result<usize, EncodeError> {
    if let Some(p) = protocols.iter().find(|p| p.len() > MAX_PROTOCOL_NAME_LEN) {
        return Err(EncodeError::ProtocolNameTooLong { len: p.len() });
    }

    let len = body_len(protocols);
    if len > MAX_PROTOCOL_LIST_LEN {
        return Err(EncodeError::ListTooLong { len });
    }
    Ok(len)
}

/// Encode a protocol list to wire format.
///
/// An empty list encodes to `00 00`; rejecting empty lists is up to the
/// caller.
pub fn encode(protocols: &[ProtocolId]) -> Result<Vec<u8>, EncodeError> {
    let len = checked_body_len(protocols)?;

    let mut buf = Vec::with_capacity(LIST_LENGTH_PREFIX_SIZE + len);
    buf.extend_from_slice(&(len as u16).to_be_bytes());
    for protocol in protocols {
        buf.push(protocol.len() as u8);
        buf.extend_from_slice(protocol.as_bytes());
    }

    trace!(
        protocols = protocols.len(),
        bytes = buf.len(),
        "encoded protocol name list"
    );
    Ok(buf)
}

/// Encode into buffer, returns bytes written
pub fn encode_into(protocols: &[ProtocolId], buf: &mut [u8]) -> Result<usize, EncodeError> {
    let len = checked_body_len(protocols)?;
    let size = LIST_LENGTH_PREFIX_SIZE + len;
    if buf.len() < size {
        return Err(EncodeError::BufferTooSmall {
            required: size,
            available: buf.len(),
        });
    }

    buf[0..2].copy_from_slice(&(len as u16).to_be_bytes());
    let mut offset = LIST_LENGTH_PREFIX_SIZE;
    for protocol in protocols {
        buf[offset] = protocol.len() as u8;
        offset += NAME_LENGTH_PREFIX_SIZE;
        buf[offset..offset + protocol.len()].copy_from_slice(protocol.as_bytes());
        offset += protocol.len();
    }

    Ok(size)
}
