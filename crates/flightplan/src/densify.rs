//! Waypoint densification: intermediate waypoints every `step_size` meters along each leg.
use tracing::debug;

use crate::{coord::haversine_m, model::Flightplan, waypoint::Waypoint, Error, FPResult};

/// Upper bound on the steps a single leg is divided into.
pub const MAX_STEPS_PER_LEG: usize = 100_000;

impl Flightplan {
    /// Add waypoints every `step_size_m` meters along the path formed by the legs.
    ///
    /// Latitude, longitude and altitude are interpolated. Orientation and radius are taken from
    /// the first waypoint of the respective leg. Take-off, touch-down, name and mission text
    /// are left alone; call [`Flightplan::update_mavlink`] to refresh the mission text.
    pub fn add_waypoints(&mut self, step_size_m: f64) -> FPResult<()> {
        if self.contents.legs.len() < 2 {
            return Err(Error::PreconditionViolation(format!(
                "at least two waypoints are required to add waypoints, have {}",
                self.contents.legs.len()
            )));
        }
        if !(step_size_m.is_finite() && step_size_m > 0.0) {
            return Err(Error::PreconditionViolation(format!(
                "step size must be a positive number of meters, got {step_size_m}"
            )));
        }
        self.contents.legs = densify(&self.contents.legs, step_size_m)?;
        Ok(())
    }
}

/// New path with `floor(d / step) - 1` points inserted into each leg of length `d`.
fn densify(legs: &[Waypoint], step_size_m: f64) -> FPResult<Vec<Waypoint>> {
    let mut path = Vec::with_capacity(legs.len());
    for pair in legs.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let dist = haversine_m(start.position(), end.position());
        let steps = (dist / step_size_m).floor();
        if steps > MAX_STEPS_PER_LEG as f64 {
            return Err(Error::PreconditionViolation(format!(
                "step size of {step_size_m} m divides a {dist:.1} m leg into more than \
                 {MAX_STEPS_PER_LEG} steps"
            )));
        }
        let steps = steps as usize;
        debug!("leg of {dist:.1} m, {steps} steps of {step_size_m} m");

        path.push(start);
        for j in 1..steps {
            let frac = j as f64 / steps as f64;
            path.push(Waypoint {
                latitude: start.latitude + frac * (end.latitude - start.latitude),
                longitude: start.longitude + frac * (end.longitude - start.longitude),
                altitude: start.altitude + frac * (end.altitude - start.altitude),
                ..start
            });
        }
    }
    if let Some(last) = legs.last() {
        path.push(*last);
    }
    Ok(path)
}
