//! Compact polyline encoder, the inverse of [`crate::decoder`].

use tracing::debug;

use crate::cursor::{BIAS, CHUNK_BITS, CHUNK_MASK, CONTINUATION};
use crate::error::PolylineError;
use crate::options::Precision;

/// Largest magnitude a scaled coordinate may have, so that deltas and their
/// zigzag form stay inside 64 bits.
const MAX_SCALED: f64 = (1u64 << 61) as f64;

/// Encodes points at five-digit precision.
pub fn encode(points: &[(f64, f64)]) -> Result<String, PolylineError> {
    encode_with(points, Precision::Five)
}

/// Encodes points at the given precision.
///
/// Each coordinate is rounded to the precision before the delta is taken,
/// so decoding the result yields the rounded points.
pub fn encode_with(points: &[(f64, f64)], precision: Precision) -> Result<String, PolylineError> {
    let factor = precision.factor();
    let mut encoded = String::with_capacity(points.len() * 8);
    let mut previous = (0i64, 0i64);

    for (index, &(lat, lng)) in points.iter().enumerate() {
        let invalid = PolylineError::NonFiniteCoordinate { index };
        let lat = scale(lat, factor).ok_or(invalid.clone())?;
        let lng = scale(lng, factor).ok_or(invalid)?;

        write_varint(&mut encoded, zigzag(lat - previous.0));
        write_varint(&mut encoded, zigzag(lng - previous.1));
        previous = (lat, lng);
    }

    debug!(
        points = points.len(),
        len = encoded.len(),
        digits = precision.digits(),
        "encoded polyline"
    );
    Ok(encoded)
}

fn scale(value: f64, factor: f64) -> Option<i64> {
    let scaled = (value * factor).round();
    if scaled.is_finite() && scaled.abs() < MAX_SCALED {
        Some(scaled as i64)
    } else {
        None
    }
}

/// Folds the sign into the low bit.
pub(crate) fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Appends `value` as 5-bit groups, least-significant first.
pub(crate) fn write_varint(out: &mut String, mut value: u64) {
    let mask = u64::from(CHUNK_MASK);
    while value > mask {
        let chunk = (value & mask) as u8 | CONTINUATION;
        out.push(char::from(chunk + BIAS));
        value >>= CHUNK_BITS;
    }
    out.push(char::from(value as u8 + BIAS));
}

/// Reusable encoder bound to one precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolylineEncoder {
    precision: Precision,
}

impl PolylineEncoder {
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn encode(&self, points: &[(f64, f64)]) -> Result<String, PolylineError> {
        encode_with(points, self.precision)
    }
}
