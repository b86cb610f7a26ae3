//! Münster points of interest for realistic route fixtures.
//!
//! Coordinates rounded to five decimals, the precision routing providers
//! encode at.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Old town attractions
// ============================================================================

pub const ATTRACTIONS: &[Location] = &[
    Location::new("St.-Paulus-Dom", 51.96292, 7.62565),
    Location::new("Prinzipalmarkt", 51.96197, 7.62850),
    Location::new("Lambertikirche", 51.96339, 7.62817),
    Location::new("Schloss Münster", 51.96366, 7.61313),
    Location::new("Aasee", 51.95556, 7.61048),
];

// ============================================================================
// Museums
// ============================================================================

pub const MUSEUMS: &[Location] = &[
    Location::new("LWL-Museum für Kunst und Kultur", 51.96214, 7.62414),
    Location::new("Kunstmuseum Pablo Picasso", 51.96033, 7.62713),
    Location::new("Stadtmuseum Münster", 51.95962, 7.63114),
];

/// A walking tour through every fixture location, in list order.
pub fn walking_tour() -> Vec<(f64, f64)> {
    ATTRACTIONS
        .iter()
        .chain(MUSEUMS)
        .map(Location::coords)
        .collect()
}
