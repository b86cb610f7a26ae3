//! Polyline representation for route geometries.
//!
//! This module provides a type for working with polylines as decoded
//! coordinate sequences. Encoding/decoding happens at the boundary
//! (when receiving from a routing provider or sending to a frontend).

use serde::{Deserialize, Serialize};

use crate::decoder::decode_with;
use crate::encoder::encode_with;
use crate::error::PolylineError;
use crate::options::{DecodeOptions, Precision};

/// A polyline representing a route geometry as decoded coordinates.
///
/// Stores latitude/longitude points in path order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

/// Latitude/longitude extent of a polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Decodes a five-digit polyline string.
    pub fn from_encoded(encoded: &str) -> Result<Self, PolylineError> {
        Self::from_encoded_with(encoded, &DecodeOptions::default())
    }

    pub fn from_encoded_with(encoded: &str, options: &DecodeOptions) -> Result<Self, PolylineError> {
        decode_with(encoded, options).map(Self::new)
    }

    /// Encodes the points at five-digit precision.
    pub fn to_encoded(&self) -> Result<String, PolylineError> {
        self.to_encoded_with(Precision::Five)
    }

    pub fn to_encoded_with(&self, precision: Precision) -> Result<String, PolylineError> {
        encode_with(&self.points, precision)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest box containing every point, or `None` for an empty polyline.
    pub fn bounds(&self) -> Option<Bounds> {
        let (&(lat, lng), rest) = self.points.split_first()?;
        let initial = Bounds {
            south: lat,
            west: lng,
            north: lat,
            east: lng,
        };
        Some(rest.iter().fold(initial, |b, &(lat, lng)| Bounds {
            south: b.south.min(lat),
            west: b.west.min(lng),
            north: b.north.max(lat),
            east: b.east.max(lng),
        }))
    }
}

impl From<Vec<(f64, f64)>> for Polyline {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points)
    }
}
