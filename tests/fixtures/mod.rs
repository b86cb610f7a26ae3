//! Test fixtures for route-polyline.
//!
//! Provides:
//! - Published reference geometries with their decoded points
//! - Real Münster points of interest to build routes through

pub mod munster_locations;
pub mod reference_geometries;

pub use munster_locations::*;
pub use reference_geometries::*;
