//! Seams for routing-response types that carry an encoded geometry.
//!
//! Concrete apps implement these for their own provider response models.

use crate::error::PolylineError;
use crate::options::{DecodeOptions, Precision};
use crate::polyline::Polyline;

/// A route (or route leg) whose path arrives as a compact polyline string.
pub trait RouteGeometry {
    /// The encoded geometry field of the response.
    fn encoded_geometry(&self) -> &str;

    /// Precision the provider encoded with.
    fn geometry_precision(&self) -> Precision {
        Precision::Five
    }

    /// Decodes the geometry with the provider's precision.
    fn decode_geometry(&self) -> Result<Polyline, PolylineError> {
        let options = DecodeOptions::default().with_precision(self.geometry_precision());
        Polyline::from_encoded_with(self.encoded_geometry(), &options)
    }
}

impl RouteGeometry for str {
    fn encoded_geometry(&self) -> &str {
        self
    }
}

impl RouteGeometry for String {
    fn encoded_geometry(&self) -> &str {
        self
    }
}
