//! Compact polyline decoder.
//!
//! Turns the encoded geometry string returned by routing providers into
//! absolute (latitude, longitude) points. Each coordinate is stored as a
//! zigzag delta from the previous one, packed into biased base-32 runs.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::cursor::DecoderCursor;
use crate::error::PolylineError;
use crate::options::{DecodeOptions, TruncationPolicy};
use crate::polyline::Polyline;

/// Decodes `encoded` at five-digit precision, dropping a trailing partial pair.
pub fn decode(encoded: &str) -> Result<Vec<(f64, f64)>, PolylineError> {
    decode_with(encoded, &DecodeOptions::default())
}

/// Decodes `encoded` using the given options.
///
/// Invalid characters and overflowing runs abort the whole call. What
/// happens to a trailing partial pair depends on `options.truncation`.
pub fn decode_with(
    encoded: &str,
    options: &DecodeOptions,
) -> Result<Vec<(f64, f64)>, PolylineError> {
    decode_points(encoded, options).inspect_err(|err| {
        debug!(len = encoded.len(), error = %err, "polyline decode failed");
    })
}

fn decode_points(
    encoded: &str,
    options: &DecodeOptions,
) -> Result<Vec<(f64, f64)>, PolylineError> {
    if let Some(max) = options.max_input_len {
        if encoded.len() > max {
            return Err(PolylineError::InputTooLong {
                len: encoded.len(),
                max,
            });
        }
    }

    let factor = options.precision.factor();
    let mut cursor = DecoderCursor::new(encoded);
    let mut points = Vec::new();

    while !cursor.is_exhausted() {
        match cursor.next_pair()? {
            Some((lat, lng)) => points.push((lat as f64 / factor, lng as f64 / factor)),
            None => match options.truncation {
                TruncationPolicy::Drop => {
                    warn!(
                        len = encoded.len(),
                        decoded = points.len(),
                        "dropping trailing partial coordinate pair"
                    );
                    break;
                }
                TruncationPolicy::Error => {
                    return Err(PolylineError::TruncatedStream {
                        position: cursor.position(),
                        decoded: points.len(),
                    });
                }
            },
        }
    }

    debug!(
        len = encoded.len(),
        points = points.len(),
        digits = options.precision.digits(),
        "decoded polyline"
    );
    Ok(points)
}

/// Decodes many independent geometries in parallel.
///
/// Results keep the input order. A failure only affects its own slot.
pub fn decode_batch<S>(encoded: &[S], options: &DecodeOptions) -> Vec<Result<Polyline, PolylineError>>
where
    S: AsRef<str> + Sync,
{
    encoded
        .par_iter()
        .map(|geometry| decode_with(geometry.as_ref(), options).map(Polyline::new))
        .collect()
}

/// Reusable decoder bound to one set of options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolylineDecoder {
    options: DecodeOptions,
}

impl PolylineDecoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn decode(&self, encoded: &str) -> Result<Vec<(f64, f64)>, PolylineError> {
        decode_with(encoded, &self.options)
    }

    pub fn decode_polyline(&self, encoded: &str) -> Result<Polyline, PolylineError> {
        self.decode(encoded).map(Polyline::new)
    }
}
