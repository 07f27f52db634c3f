//! Integrity envelope: payload bytes plus a trailing 64-bit hash tag.
//!
//! Layout:
//!
//! ```text
//! [ compact payload ] [ murmur3(payload, 0xFF): u64 LE ]
//! ```
//!
//! The tag is computed over the payload bytes as laid out in the buffer, not
//! over the logical value, which keeps verification a pure byte-level check.
//! Decoding verifies the tag *before* touching the payload; a truncated or
//! tampered buffer is rejected with
//! [`BadEncoding`](crate::OpacodeError::BadEncoding).
//!
//! The tag detects corruption, not forgery: the seed is a fixed constant,
//! so anyone can recompute it. Keyed validation is the codec's job (see
//! [`codec::MurMurEncoder`](crate::codec::MurMurEncoder)).

use crate::compact::{self, Compact};
use crate::error::{OpacodeError, Result};
use crate::hash;

/// Width of the trailing tag.
const TAG_SIZE: usize = core::mem::size_of::<u64>();

/// Encoded size of `value` inside an integrity envelope.
pub fn integrity_size<T: Compact + ?Sized>(value: &T) -> usize {
    compact::size(value) + TAG_SIZE
}

/// Serializes `value` and appends the integrity tag.
pub fn integrity_serialize<T: Compact + ?Sized>(value: &T) -> Vec<u8> {
    let mut out = Vec::with_capacity(integrity_size(value));
    value.put(&mut out);
    let tag = hash::hash_bytes(&out);
    out.extend_from_slice(&tag.to_le_bytes());
    out
}

/// Verifies the envelope and decodes a fresh `T` from its payload.
pub fn integrity_deserialize<T: Compact + Default>(buf: &[u8]) -> Result<T> {
    let mut value = T::default();
    integrity_deserialize_into(&mut value, buf)?;
    Ok(value)
}

/// Verifies the envelope and decodes its payload into `value` in place.
pub fn integrity_deserialize_into<T: Compact>(value: &mut T, buf: &[u8]) -> Result<()> {
    if buf.len() < TAG_SIZE {
        return Err(OpacodeError::BadEncoding);
    }

    let (payload, tag) = buf.split_at(buf.len() - TAG_SIZE);
    let mut stored = 0u64;
    compact::deserialize_into(&mut stored, tag)?;

    if hash::hash_bytes(payload) != stored {
        return Err(OpacodeError::BadEncoding);
    }

    compact::deserialize_into(value, payload)?;
    Ok(())
}
