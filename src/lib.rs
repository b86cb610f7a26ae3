//! route-polyline
//!
//! Decoding and encoding of the compact polyline format routing providers
//! use for route geometries.

pub mod traits;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod options;
pub mod polyline;

mod cursor;

pub use decoder::{decode, decode_batch, decode_with, PolylineDecoder};
pub use encoder::{encode, encode_with, PolylineEncoder};
pub use error::PolylineError;
pub use options::{DecodeOptions, Precision, TruncationPolicy};
pub use polyline::{Bounds, Polyline};
pub use traits::RouteGeometry;
