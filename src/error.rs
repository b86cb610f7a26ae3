//! Error taxonomy for polyline decoding and encoding.

use thiserror::Error;

/// Errors raised while decoding or encoding a compact polyline.
///
/// Positions are byte offsets into the encoded string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// A character outside the encoded alphabet (`'?'..='~'`).
    #[error("invalid polyline character {found:?} at byte {position}")]
    InvalidCharacter { position: usize, found: char },

    /// A variable-length integer or a running accumulator no longer fits
    /// in 64 bits.
    #[error("polyline value overflows at byte {position}")]
    EncodingOverflow { position: usize },

    /// The stream ended inside a coordinate pair.
    ///
    /// Only produced under [`TruncationPolicy::Error`](crate::options::TruncationPolicy::Error).
    #[error("polyline truncated at byte {position} after {decoded} complete points")]
    TruncatedStream { position: usize, decoded: usize },

    /// The input is longer than the configured cap.
    #[error("polyline input is {len} bytes, limit is {max}")]
    InputTooLong { len: usize, max: usize },

    /// A coordinate handed to the encoder is NaN, infinite, or too large
    /// to scale.
    #[error("coordinate at index {index} cannot be encoded")]
    NonFiniteCoordinate { index: usize },
}
