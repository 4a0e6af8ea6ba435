//! Error types used by the crate.

use thiserror::Error;

/// Failure to decode a string in the Encoded Polyline Algorithm Format.
///
/// Offsets are byte positions in the encoded string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// The input ended in the middle of a value: the last byte read still had the continuation
    /// bit set.
    #[error("encoded path ends inside a value at byte {offset}")]
    Truncated {
        /// Position where another byte was expected.
        offset: usize,
    },
    /// A single value used more groups than any coordinate can need.
    #[error("value starting before byte {offset} is longer than 6 groups")]
    Overflow {
        /// Position right after the last consumed group.
        offset: usize,
    },
    /// A byte outside of the `[63, 126]` range.
    #[error("invalid byte {byte:#04x} at {offset}")]
    InvalidByte {
        /// Position of the byte.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },
    /// Latitude was decoded but the input ended before the longitude.
    #[error("encoded path ends after a latitude at byte {offset}")]
    MissingLongitude {
        /// Length of the input.
        offset: usize,
    },
}

/// Scale factor that cannot be used for polyline encoding.
///
/// A factor must be positive and small enough that a full 360 degree longitude step still fits
/// into the groups the decoder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("unsupported polyline precision factor {factor}")]
pub struct InvalidPrecision {
    /// The rejected factor.
    pub factor: f64,
}
