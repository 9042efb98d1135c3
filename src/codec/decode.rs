//! ProtocolNameList decoding.

use tracing::trace;

use crate::core::{DecodeError, LIST_LENGTH_PREFIX_SIZE, NAME_LENGTH_PREFIX_SIZE, ProtocolId};

/// Decode a protocol list from wire format.
///
/// Only the first `2 + ProtocolNameListLength` bytes are read; anything after
/// them is ignored so the list can sit inside a larger extension buffer. Use
/// [`decode_with_length`] to learn how much was consumed.
///
/// Duplicates are returned as they appear on the wire.
pub fn decode(data: &[u8]) -> Result<Vec<ProtocolId>, DecodeError> {
    decode_with_length(data).map(|(protocols, _)| protocols)
}

/// Decode from bytes, returning the protocols and bytes consumed
pub fn decode_with_length(data: &[u8]) -> Result<(Vec<ProtocolId>, usize), DecodeError> {
    if data.len() < LIST_LENGTH_PREFIX_SIZE {
        return Err(DecodeError::TooShort {
            expected: LIST_LENGTH_PREFIX_SIZE,
            actual: data.len(),
        });
    }

    let list_len = u16::from_be_bytes([data[0], data[1]]) as usize;
    let available = data.len() - LIST_LENGTH_PREFIX_SIZE;
    if available < list_len {
        return Err(DecodeError::IncompleteList {
            declared: list_len,
            available,
        });
    }

    let end = LIST_LENGTH_PREFIX_SIZE + list_len;
    let list = &data[..end];
    let mut protocols = Vec::new();
    let mut offset = LIST_LENGTH_PREFIX_SIZE;

    while offset < end {
        let Some(&name_len) = list.get(offset) else {
            return Err(DecodeError::UnexpectedEnd { offset });
        };
        let name_len = usize::from(name_len);
        if name_len == 0 {
            return Err(DecodeError::EmptyProtocolName { offset });
        }

        let start = offset + NAME_LENGTH_PREFIX_SIZE;
        if start + name_len > end {
            return Err(DecodeError::IncompleteName {
                offset,
                declared: name_len,
                available: end - start,
            });
        }

        protocols.push(ProtocolId::from_wire(&list[start..start + name_len]));
        offset = start + name_len;
    }

    trace!(
        protocols = protocols.len(),
        consumed = end,
        trailing = data.len() - end,
        "decoded protocol name list"
    );
    Ok((protocols, end))
}
