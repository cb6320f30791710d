use crate::coord::Point2d;

/// A geo-referenced position the vehicle has to reach.
///
/// Plain value: copies never share state with the original.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Waypoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    /// Bearing in degrees.
    pub orientation: f64,
    /// Acceptance radius in meters, within which the waypoint counts as reached.
    pub radius: f64,
}

impl Waypoint {
    pub fn new(latitude: f64, longitude: f64, altitude: f64, orientation: f64, radius: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
            orientation,
            radius,
        }
    }

    /// Range check of every bounded field. Altitude is not bounded.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
            && (0.0..=360.0).contains(&self.orientation)
            && self.radius >= 0.0
    }

    pub fn position(&self) -> Point2d {
        Point2d(self.latitude, self.longitude)
    }
}
