//! Coordinate types and utilities.
use crate::{Error, FPResult};

//  _____
// |_   _|   _ _ __   ___  ___
//   | || | | | '_ \ / _ \/ __|
//   | || |_| | |_) |  __/\__ \
//   |_| \__, | .__/ \___||___/
//       |___/|_|

/// Mean earth radius used for surface distances.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// (latitude, longitude) in degrees, WGS 84.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point2d(pub f64, pub f64);

/// Bounding box rectangle with corners in WGS 84 coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BBoxWGS {
    pub upper_left: Point2d,
    pub lower_right: Point2d,
}

impl BBoxWGS {
    pub fn new(upper_left: Point2d, lower_right: Point2d) -> FPResult<Self> {
        Self::validate_lat_lon(upper_left)?;
        Self::validate_lat_lon(lower_right)?;
        Ok(Self {
            upper_left,
            lower_right,
        })
    }

    /// Smallest box containing all `points`. Errors on an empty iterator or on out-of-range
    /// coordinates.
    pub fn enclosing<I>(points: I) -> FPResult<Self>
    where
        I: IntoIterator<Item = Point2d>,
    {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Err(Error::InvalidCoord("no points to enclose".into()));
        };
        let (mut north, mut west, mut south, mut east) = (first.0, first.1, first.0, first.1);
        for Point2d(lat, lon) in points {
            north = north.max(lat);
            south = south.min(lat);
            west = west.min(lon);
            east = east.max(lon);
        }
        Self::new(Point2d(north, west), Point2d(south, east))
    }

    pub fn midpoint(&self) -> Point2d {
        Point2d(
            (self.upper_left.0 + self.lower_right.0) / 2.0,
            (self.upper_left.1 + self.lower_right.1) / 2.0,
        )
    }

    fn validate_lat_lon(coord: Point2d) -> FPResult<()> {
        Self::validate_lat(coord.0)?;
        Self::validate_lon(coord.1)?;
        Ok(())
    }

    fn validate_lat(lat: f64) -> FPResult<()> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidCoord(format!("latitude {lat}")));
        }
        Ok(())
    }

    fn validate_lon(lon: f64) -> FPResult<()> {
        if !(-180.0..=180.0).contains(&lon) {
            return Err(Error::InvalidCoord(format!("longitude {lon}")));
        }
        Ok(())
    }
}

/// Compass heading in degrees, clockwise from north, kept in `[0, 360)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Heading(pub f64);

impl Heading {
    pub fn rot(&mut self, deg_cw: f64) {
        let deg = (self.0 + deg_cw).rem_euclid(360.0);
        // rem_euclid rounds tiny negative angles up to 360
        self.0 = if deg >= 360.0 { 0.0 } else { deg };
    }
}

impl From<f64> for Heading {
    fn from(deg: f64) -> Self {
        let mut h = Self(0.0);
        h.rot(deg);
        h
    }
}

impl From<Heading> for f64 {
    fn from(h: Heading) -> f64 {
        h.0
    }
}

/// Haversine surface distance in meters.
pub fn haversine_m(a: Point2d, b: Point2d) -> f64 {
    let lat_a = a.0.to_radians();
    let lat_b = b.0.to_radians();
    let d_lat = lat_b - lat_a;
    let d_lon = (b.1 - a.1).to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Initial great-circle bearing to travel from `from` to `to`.
pub fn initial_bearing(from: Point2d, to: Point2d) -> Heading {
    let lat_a = from.0.to_radians();
    let lat_b = to.0.to_radians();
    let d_lon = (to.1 - from.1).to_radians();
    let y = d_lon.sin() * lat_b.cos();
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * d_lon.cos();
    Heading::from(y.atan2(x).to_degrees())
}
