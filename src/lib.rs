//! # Opacode
//!
//! A compact reflection-driven binary serializer, a 64-bit murmur3 digest,
//! and a symmetric byte-level obfuscating codec, stacked into one pipeline.
//!
//! ## Overview
//!
//! Opacode treats serialization as a property of the type: scalars,
//! containers, optionals, tuples, and derived aggregates each carry a fixed
//! per-kind byte layout, and the encoder simply walks the value. There is no
//! schema negotiation and no self-description on the wire; both sides agree
//! on the type, and the format is exactly as wide as the data.
//!
//! Three layers build on that:
//!
//! * **Serializers.** [`compact`] is the general, length-prefixed format for
//!   variable-width values. [`trivial`] is its fixed-width sibling for
//!   values whose size is a compile-time constant. Both are derivable for
//!   structs via the [`Compact`] and [`Trivial`] derive macros, which visit
//!   fields in declaration order.
//! * **Integrity.** [`envelope`] seals any compact payload with a trailing
//!   [`hash`] tag and refuses tampered or truncated buffers on decode.
//! * **Obfuscation.** [`codec`] composes a keyed-validation layer with a
//!   salted permutation-per-byte layer driven by [`mt19937`], producing
//!   uniform-looking ciphertext that still round-trips exactly.
//!
//! ## Serializing
//!
//! ```rust
//! use opacode::compact;
//!
//! #[derive(Debug, Default, PartialEq, opacode::Compact)]
//! struct Telemetry {
//!     channel: u16,
//!     samples: Vec<f64>,
//!     label: String,
//! }
//!
//! let before = Telemetry {
//!     channel: 7,
//!     samples: vec![0.5, 2.25],
//!     label: "probe".into(),
//! };
//!
//! let wire = compact::serialize(&before);
//! assert_eq!(wire.len(), compact::size(&before));
//!
//! let after: Telemetry = compact::deserialize(&wire)?;
//! assert_eq!(before, after);
//! # Ok::<(), opacode::OpacodeError>(())
//! ```
//!
//! ## Encoding
//!
//! ```rust
//! use opacode::codec::{spawn_encoder, Encoder};
//!
//! let mut codec = spawn_encoder(b"my_secret");
//! let sealed = codec.encode(b"tomskicus")?;
//! assert_eq!(sealed.len(), 9 + 32);
//! assert_eq!(codec.decode(&sealed)?, b"tomskicus");
//! # Ok::<(), opacode::OpacodeError>(())
//! ```
//!
//! ## Guarantees and non-guarantees
//!
//! * Every multi-byte scalar is little-endian on the wire, regardless of
//!   host endianness.
//! * `size(v) == serialize(v).len()`, and buffers are allocated to exactly
//!   that size up front.
//! * Decoding is fully checked: malformed input yields
//!   [`OpacodeError::BadEncoding`], never a panic.
//! * The codec is **obfuscation, not encryption**. The permutation layer
//!   hides byte statistics and the keyed digest catches tampering, but
//!   nothing here withstands cryptanalysis. Do not reach for this crate
//!   when you need confidentiality.
//!
//! ## Threading
//!
//! The serializers and the hash are pure and freely shareable. An encoder
//! instance owns a salt generator that advances on every encode, so share
//! one across threads only behind external synchronization, or give each
//! thread its own.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod codec;
pub mod compact;
pub mod envelope;
pub mod error;
pub mod hash;
pub mod mt19937;
pub mod trivial;

mod wire;

pub use codec::{spawn_encoder, DoubleEncoder, Encoder, MurMurEncoder, Mt19937Encoder};
pub use compact::Compact;
pub use error::{OpacodeError, Result};
pub use mt19937::Mt19937;
pub use trivial::Trivial;

// Re-export the derive macros so they are accessible as `opacode::Compact`
// and `opacode::Trivial` alongside the traits they implement.
pub use opacode_derive::{Compact, Trivial};
