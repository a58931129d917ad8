//! Byte codec for items crossing the storage boundary.
//!
//! Items are persisted as JSON objects with `id` and `name` fields. The
//! encoding is structural and field-for-field, so `decode(encode(x)) == x`
//! for every well-formed item.

use crate::item::Item;
use thiserror::Error;

/// Codec errors.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("item does not encode: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("stored bytes are not a valid item: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Serialize an item to its stored byte representation.
pub fn encode(item: &Item) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(item).map_err(CodecError::Encode)
}

/// Deserialize an item from its stored byte representation.
///
/// Fails with [`CodecError::Decode`] on truncated, malformed, or
/// structurally mismatched bytes.
pub fn decode(bytes: &[u8]) -> Result<Item, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}
