//! MurmurHash3 x64_128, reduced to its low 64 bits.
//!
//! This is the canonical Austin Appleby x64_128 construction: two 64-bit
//! accumulators over 16-byte blocks, a tail fold for the trailing 0..15
//! bytes, and the `fmix64` avalanche finalizer. Only `h1` is returned; the
//! upper half of the 128-bit digest is folded in during finalization and
//! then discarded.
//!
//! The function is part of the wire format twice over: it is the integrity
//! tag in [`envelope`](crate::envelope) and the seed-derivation step of the
//! permutation codec in [`codec`](crate::codec). Implementations on both
//! sides of a wire must agree bit for bit, which is why it lives in-crate
//! instead of behind a third-party digest API.
//!
//! Not a cryptographic hash. All arithmetic is wrapping 64-bit unsigned.

/// Seed applied when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0xFF;

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

const fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

fn word(raw: &[u8]) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(raw);
    u64::from_le_bytes(bytes)
}

/// Hashes `buf` under an explicit `seed`.
pub fn murmur_hash(buf: &[u8], seed: u64) -> u64 {
    let mut h1 = seed;
    let mut h2 = seed;

    let mut blocks = buf.chunks_exact(16);
    for block in &mut blocks {
        let mut k1 = word(&block[0..8]);
        let mut k2 = word(&block[8..16]);

        k1 = k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2);
        h1 ^= k1;
        h1 = h1.rotate_left(27).wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dc_e729);

        k2 = k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1);
        h2 ^= k2;
        h2 = h2.rotate_left(31).wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x3849_5ab5);
    }

    let tail = blocks.remainder();
    if tail.len() > 8 {
        let mut k2 = 0u64;
        for (i, &byte) in tail[8..].iter().enumerate() {
            k2 ^= u64::from(byte) << (8 * i);
        }
        h2 ^= k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1);
    }
    if !tail.is_empty() {
        let mut k1 = 0u64;
        for (i, &byte) in tail[..tail.len().min(8)].iter().enumerate() {
            k1 ^= u64::from(byte) << (8 * i);
        }
        h1 ^= k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2);
    }

    h1 ^= buf.len() as u64;
    h2 ^= buf.len() as u64;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = fmix64(h1);
    h2 = fmix64(h2);

    // the final h2 += h1 of the reference only feeds the discarded upper half
    h1.wrapping_add(h2)
}

/// Hashes `buf` under [`DEFAULT_SEED`].
pub fn hash_bytes(buf: &[u8]) -> u64 {
    murmur_hash(buf, DEFAULT_SEED)
}
