//! Centralized error handling for Opacode.
//!
//! The codec deliberately exposes a narrow error surface: a decoder either
//! reconstructs the message or reports [`OpacodeError::BadEncoding`], with no
//! detail about *where* the buffer went wrong. Collapsing truncation, tag
//! mismatch, and keyed-hash mismatch into one opaque variant keeps the
//! decoder from acting as an oracle for byte-flipping callers.
//!
//! Serialization itself is total and never fails; only the read path and the
//! codec boundary produce errors.
//!
//! ## Usage
//!
//! ```rust
//! use opacode::{envelope, OpacodeError};
//!
//! let mut sealed = envelope::integrity_serialize(&42u32);
//! sealed[0] ^= 0x01;
//! let err = envelope::integrity_deserialize::<u32>(&sealed).unwrap_err();
//! assert_eq!(err, OpacodeError::BadEncoding);
//! ```

use std::fmt;

/// A specialized `Result` type for Opacode operations.
pub type Result<T> = std::result::Result<T, OpacodeError>;

/// The error enum covering all failure domains in Opacode.
///
/// ## Variants
///
/// - **BadEncoding:** the buffer being decoded is truncated, fails an
///   integrity check, or is structurally malformed.
/// - **InvalidArgument:** an encoder was handed input it refuses to process
///   (only produced by encoders configured with a size cap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpacodeError {
    /// Truncated buffer, integrity tag mismatch, keyed-hash mismatch, or a
    /// malformed payload read.
    ///
    /// Deliberately carries no context: decoders treat every malformed input
    /// identically.
    BadEncoding,

    /// Input exceeds a configured encoding cap.
    ///
    /// Unused unless a cap is explicitly configured (see
    /// [`Mt19937Encoder::with_limit`](crate::codec::Mt19937Encoder::with_limit)).
    InvalidArgument,
}

impl fmt::Display for OpacodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadEncoding => write!(f, "bad encoding format"),
            Self::InvalidArgument => write!(f, "invalid argument"),
        }
    }
}

impl std::error::Error for OpacodeError {}
