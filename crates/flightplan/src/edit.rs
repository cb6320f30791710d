//! Uniform setters over all waypoints of a plan.
use tracing::debug;

use crate::{
    coord::{initial_bearing, BBoxWGS},
    model::Flightplan,
    waypoint::Waypoint,
    Error, FPResult,
};

impl Flightplan {
    /// Set the acceptance radius of every waypoint, take-off and touch-down included.
    pub fn set_radius(&mut self, radius: f64) -> FPResult<()> {
        self.for_each_waypoint(|wp| wp.radius = radius)
    }

    /// Set the altitude of the whole flight path.
    pub fn set_altitude(&mut self, altitude: f64) -> FPResult<()> {
        self.for_each_waypoint(|wp| wp.altitude = altitude)
    }

    /// Set a single bearing for all waypoints.
    pub fn set_bearing(&mut self, bearing: f64) -> FPResult<()> {
        self.for_each_waypoint(|wp| wp.orientation = bearing)
    }

    /// Turn each leg waypoint towards the center of the bounding box of the legs. Take-off and
    /// touch-down keep their orientation.
    pub fn set_bearing_to_center(&mut self) -> FPResult<()> {
        self.require_endpoints()?;
        if self.contents.legs.is_empty() {
            return Err(Error::PreconditionViolation(
                "no waypoints to turn towards the center".into(),
            ));
        }
        let bbox = BBoxWGS::enclosing(self.contents.legs.iter().map(Waypoint::position))?;
        let center = bbox.midpoint();
        debug!("turning {} waypoints towards {center:?}", self.contents.legs.len());
        for wp in self.contents.legs.iter_mut() {
            wp.orientation = initial_bearing(wp.position(), center).into();
        }
        Ok(())
    }

    fn require_endpoints(&self) -> FPResult<()> {
        if self.contents.take_off.is_none() || self.contents.touch_down.is_none() {
            return Err(Error::PreconditionViolation(
                "take-off and touch-down positions are required".into(),
            ));
        }
        Ok(())
    }

    fn for_each_waypoint<F>(&mut self, mut f: F) -> FPResult<()>
    where
        F: FnMut(&mut Waypoint),
    {
        self.require_endpoints()?;
        let contents = &mut self.contents;
        contents
            .legs
            .iter_mut()
            .chain(contents.take_off.as_mut())
            .chain(contents.touch_down.as_mut())
            .for_each(|wp| f(wp));
        Ok(())
    }
}
