//! Symmetric obfuscating codec.
//!
//! Two encoder layers and a composition, all speaking `bytes -> bytes`:
//!
//! - [`MurMurEncoder`]: keyed validation. Tags the plaintext with a
//!   secret-seeded murmur3 digest and seals tag + plaintext in an integrity
//!   envelope.
//! - [`Mt19937Encoder`]: uniform-looking output. Draws a fresh salt per
//!   message, derives a key-stream seed from `secret || salt`, and pushes
//!   every byte through its own freshly drawn permutation of `{0..255}`.
//! - [`DoubleEncoder`]: runs one inside the other.
//!
//! [`spawn_encoder`] wires the stock pipeline. Its wire layout, for an
//! `n`-byte plaintext (total `n + 32`):
//!
//! ```text
//! [ salt: u64 LE ]                                   Mt19937 layer
//! [   validation_key: u64 LE   ]
//! [   encoded_len:    u64 LE   ]  permuted bytewise  MurMur layer
//! [   encoded_len bytes        ]
//! [   envelope tag:   u64 LE   ]
//! ```
//!
//! This is obfuscation with integrity checking, not confidentiality: the
//! permutation hides byte statistics, the two digests catch tampering and
//! wrong keys, and none of it resists a determined attacker.
//!
//! An encoder instance owns the salt generator, so it is stateful and not
//! meant to be shared across threads; encode twice and the salts differ,
//! which is why equal plaintexts produce unequal ciphertexts.

use crate::compact::Compact;
use crate::envelope;
use crate::error::{OpacodeError, Result};
use crate::hash;
use crate::mt19937::Mt19937;
use crate::trivial;

/// Width of the salt prepended to every permutation-coded message.
const SALT_SIZE: usize = core::mem::size_of::<u64>();

/// A symmetric byte-buffer codec.
///
/// `encode` may advance internal state (the salt generator), so both
/// operations take `&mut self`. Decoding is order-independent: messages may
/// be decoded in any order, any number of times.
pub trait Encoder {
    /// Encodes `msg` into a fresh buffer.
    fn encode(&mut self, msg: &[u8]) -> Result<Vec<u8>>;

    /// Decodes a buffer produced by `encode` under the same configuration.
    fn decode(&mut self, msg: &[u8]) -> Result<Vec<u8>>;
}

/// Wire aggregate of the keyed-validation layer.
#[derive(Debug, Default)]
struct MurMurMessage {
    validation_key: u64,
    encoded: Vec<u8>,
}

impl Compact for MurMurMessage {
    fn count(&self) -> usize {
        self.validation_key.count() + self.encoded.count()
    }

    fn put(&self, out: &mut Vec<u8>) {
        self.validation_key.put(out);
        self.encoded.put(out);
    }

    fn get(&mut self, inp: &mut &[u8]) -> Result<()> {
        self.validation_key.get(inp)?;
        self.encoded.get(inp)
    }
}

/// Keyed-validation encoder.
///
/// Seals `{murmur3(msg, secret), msg}` in an integrity envelope. Decoding
/// therefore checks two digests: the unkeyed envelope tag and the keyed
/// validation key. Either mismatch is
/// [`BadEncoding`](crate::OpacodeError::BadEncoding).
#[derive(Debug, Clone)]
pub struct MurMurEncoder {
    secret: u64,
}

impl MurMurEncoder {
    /// Creates an encoder validating under `secret`.
    pub fn new(secret: u64) -> Self {
        Self { secret }
    }
}

impl Encoder for MurMurEncoder {
    fn encode(&mut self, msg: &[u8]) -> Result<Vec<u8>> {
        let message = MurMurMessage {
            validation_key: hash::murmur_hash(msg, self.secret),
            encoded: msg.to_vec(),
        };
        Ok(envelope::integrity_serialize(&message))
    }

    fn decode(&mut self, msg: &[u8]) -> Result<Vec<u8>> {
        let mut message = MurMurMessage::default();
        envelope::integrity_deserialize_into(&mut message, msg)?;

        if hash::murmur_hash(&message.encoded, self.secret) != message.validation_key {
            return Err(OpacodeError::BadEncoding);
        }

        Ok(message.encoded)
    }
}

/// Draws a permutation of `{0..255}` from the key stream.
///
/// Fisher-Yates over the identity table: 255 swaps, position `i` paired
/// with a draw from `[i, 255]`. Encode and decode must draw identical
/// tables from identical seeds, so this is the single shuffle used by both.
fn byte_table(randomizer: &mut Mt19937) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (value, slot) in table.iter_mut().enumerate() {
        *slot = value as u8;
    }
    for i in 0..255 {
        let span = (256 - i) as u64;
        let j = i + (randomizer.next_u64() % span) as usize;
        table.swap(i, j);
    }
    table
}

/// Salted byte-permutation encoder.
///
/// Output is `[salt: u64 LE][ciphertext]` with the ciphertext exactly as
/// long as the plaintext. Every message draws a fresh salt from the
/// instance's generator; every byte draws a fresh permutation from a
/// `murmur3(secret || salt)`-seeded key stream.
pub struct Mt19937Encoder {
    secret: Vec<u8>,
    limit: Option<usize>,
    salt_randgen: Mt19937,
}

impl Mt19937Encoder {
    /// Creates an encoder keyed by `secret`, drawing salts from
    /// `salt_randgen`.
    pub fn new(secret: impl Into<Vec<u8>>, salt_randgen: Mt19937) -> Self {
        Self {
            secret: secret.into(),
            limit: None,
            salt_randgen,
        }
    }

    /// Like [`new`](Self::new), but refuses messages longer than `limit`
    /// bytes with [`InvalidArgument`](crate::OpacodeError::InvalidArgument).
    pub fn with_limit(secret: impl Into<Vec<u8>>, limit: usize, salt_randgen: Mt19937) -> Self {
        Self {
            secret: secret.into(),
            limit: Some(limit),
            salt_randgen,
        }
    }

    fn randomizer_seed(&self, salt: u64) -> u64 {
        let mut keyed = self.secret.clone();
        trivial::serialize_into(&mut keyed, &salt);
        hash::hash_bytes(&keyed)
    }
}

impl Encoder for Mt19937Encoder {
    fn encode(&mut self, msg: &[u8]) -> Result<Vec<u8>> {
        if let Some(limit) = self.limit {
            if msg.len() > limit {
                return Err(OpacodeError::InvalidArgument);
            }
        }

        let salt = self.salt_randgen.next_u64();
        let mut randomizer = Mt19937::new(self.randomizer_seed(salt));

        let mut out = Vec::with_capacity(SALT_SIZE + msg.len());
        trivial::serialize_into(&mut out, &salt);
        for &byte in msg {
            let table = byte_table(&mut randomizer);
            out.push(table[usize::from(byte)]);
        }

        Ok(out)
    }

    fn decode(&mut self, msg: &[u8]) -> Result<Vec<u8>> {
        if msg.len() < SALT_SIZE {
            return Err(OpacodeError::BadEncoding);
        }

        let (salt_raw, body) = msg.split_at(SALT_SIZE);
        let mut salt = 0u64;
        trivial::deserialize_into(&mut salt, salt_raw)?;
        let mut randomizer = Mt19937::new(self.randomizer_seed(salt));

        let mut out = Vec::with_capacity(body.len());
        for &byte in body {
            let table = byte_table(&mut randomizer);
            let plain = table
                .iter()
                .position(|&substituted| substituted == byte)
                .ok_or(OpacodeError::BadEncoding)?;
            out.push(plain as u8);
        }

        Ok(out)
    }
}

/// Composition of two encoders: `second` runs over the output of `first`.
pub struct DoubleEncoder {
    first: Box<dyn Encoder>,
    second: Box<dyn Encoder>,
}

impl DoubleEncoder {
    /// Composes `first` (inner) and `second` (outer).
    pub fn new(first: Box<dyn Encoder>, second: Box<dyn Encoder>) -> Self {
        Self { first, second }
    }
}

impl Encoder for DoubleEncoder {
    fn encode(&mut self, msg: &[u8]) -> Result<Vec<u8>> {
        let inner = self.first.encode(msg)?;
        self.second.encode(&inner)
    }

    fn decode(&mut self, msg: &[u8]) -> Result<Vec<u8>> {
        let outer = self.second.decode(msg)?;
        self.first.decode(&outer)
    }
}

/// Builds the stock pipeline: a keyed-validation layer wrapped in a salted
/// permutation layer, both derived from `secret`.
///
/// The salt generator is default-seeded, so the salt sequence, and with it
/// every ciphertext, is reproducible across process runs. That is a
/// deliberate non-security property of this codec; seed an
/// [`Mt19937Encoder`] from an OS entropy source instead if unpredictability
/// matters.
pub fn spawn_encoder(secret: &[u8]) -> Box<dyn Encoder> {
    let uint_secret = hash::hash_bytes(secret);
    let integrity_encoder = MurMurEncoder::new(uint_secret);
    let unif_dist_encoder = Mt19937Encoder::new(secret, Mt19937::default());

    Box::new(DoubleEncoder::new(
        Box::new(integrity_encoder),
        Box::new(unif_dist_encoder),
    ))
}
