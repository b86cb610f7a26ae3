//! Encoded geometries with known decodings.

/// An encoded polyline and the points it decodes to.
#[derive(Debug, Clone)]
pub struct ReferenceGeometry {
    pub name: &'static str,
    pub encoded: &'static str,
    pub points: &'static [(f64, f64)],
}

/// The widely published three-point example.
pub const PUBLISHED_EXAMPLE: ReferenceGeometry = ReferenceGeometry {
    name: "published example",
    encoded: "_p~iF~ps|U_ulLnnqC_mqNvxq`@",
    points: &[(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)],
};

/// The same string read as a six-digit geometry.
pub const PUBLISHED_EXAMPLE_POLYLINE6: ReferenceGeometry = ReferenceGeometry {
    name: "published example, polyline6",
    encoded: "_p~iF~ps|U_ulLnnqC_mqNvxq`@",
    points: &[(3.85, -12.02), (4.07, -12.095), (4.3252, -12.6453)],
};

pub const ORIGIN: ReferenceGeometry = ReferenceGeometry {
    name: "origin",
    encoded: "??",
    points: &[(0.0, 0.0)],
};

pub const EMPTY: ReferenceGeometry = ReferenceGeometry {
    name: "empty",
    encoded: "",
    points: &[],
};
