//! Checked cursor primitives shared by the read paths.
//!
//! A read cursor is a `&mut &[u8]`: taking bytes advances the slice in place.
//! Every take is bounds-checked so a corrupt buffer surfaces as
//! `BadEncoding` instead of an out-of-bounds read.

use crate::error::{OpacodeError, Result};

/// Splits `n` bytes off the front of the cursor.
pub(crate) fn take<'a>(inp: &mut &'a [u8], n: usize) -> Result<&'a [u8]> {
    if inp.len() < n {
        return Err(OpacodeError::BadEncoding);
    }
    let (head, tail) = inp.split_at(n);
    *inp = tail;
    Ok(head)
}

/// Takes a fixed-width prefix as an owned array.
pub(crate) fn take_array<const N: usize>(inp: &mut &[u8]) -> Result<[u8; N]> {
    let mut raw = [0u8; N];
    raw.copy_from_slice(take(inp, N)?);
    Ok(raw)
}

/// Reads a little-endian `u64` length prefix.
///
/// Lengths that do not fit the host `usize` are malformed by definition.
pub(crate) fn take_len(inp: &mut &[u8]) -> Result<usize> {
    let raw = take_array::<8>(inp)?;
    usize::try_from(u64::from_le_bytes(raw)).map_err(|_| OpacodeError::BadEncoding)
}
