//! Decoder configuration.

use serde::{Deserialize, Serialize};

/// Number of decimal digits carried by each encoded coordinate.
///
/// Google-style polylines and openrouteservice use five digits. OSRM emits
/// six digits when asked for `geometries=polyline6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Precision {
    #[default]
    Five,
    Six,
}

impl Precision {
    /// Decimal digits after the point.
    pub fn digits(self) -> u32 {
        match self {
            Precision::Five => 5,
            Precision::Six => 6,
        }
    }

    /// Scale between degrees and the stored integer (10^digits).
    pub fn factor(self) -> f64 {
        match self {
            Precision::Five => 1e5,
            Precision::Six => 1e6,
        }
    }
}

/// What to do when the stream ends inside a coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TruncationPolicy {
    /// Discard the partial pair and return the points decoded so far.
    #[default]
    Drop,
    /// Fail with [`PolylineError::TruncatedStream`](crate::error::PolylineError::TruncatedStream).
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodeOptions {
    pub precision: Precision,
    pub truncation: TruncationPolicy,
    /// Reject inputs longer than this many bytes before scanning.
    pub max_input_len: Option<usize>,
}

impl DecodeOptions {
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_truncation(mut self, truncation: TruncationPolicy) -> Self {
        self.truncation = truncation;
        self
    }

    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = Some(max);
        self
    }
}
