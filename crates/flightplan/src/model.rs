//! The flight plan model: take-off and touch-down positions plus the ordered waypoints between
//! them.
use tracing::{debug, warn};

use crate::{
    events::{EventBus, PlanEvent},
    protocol::{kmz::Kmz, mavlink::Mavlink, PlanDecoder, PlanEncoder},
    waypoint::Waypoint,
    FPResult,
};

/// Plain data of a flight plan. This is what decoders produce, encoders consume and events
/// carry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanContents {
    pub name: String,
    /// Mission text this plan was decoded from or last encoded to.
    pub raw_text: String,
    pub take_off: Option<Waypoint>,
    pub touch_down: Option<Waypoint>,
    /// Waypoints between take-off and touch-down. Mission text keeps the take-off and
    /// touch-down positions out of this list; a KMZ path includes them.
    pub legs: Vec<Waypoint>,
}

impl PlanContents {
    /// Take-off and touch-down present and in range, name and mission text set, all legs in
    /// range. An empty leg list is accepted.
    pub fn is_valid(&self) -> bool {
        let endpoint_ok = |wp: &Option<Waypoint>| wp.as_ref().is_some_and(Waypoint::is_valid);
        endpoint_ok(&self.take_off)
            && endpoint_ok(&self.touch_down)
            && !self.name.is_empty()
            && !self.raw_text.is_empty()
            && self.legs.iter().all(Waypoint::is_valid)
    }

    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }
}

/// A flight plan which announces every decode to its subscribers.
///
/// A new or cleared flight plan is invalid. Decoding replaces the contents atomically: either
/// the whole input is taken over or the plan is left cleared.
#[derive(Debug, Default)]
pub struct Flightplan {
    pub(crate) contents: PlanContents,
    events: EventBus,
}

impl Flightplan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a plan from mission text with the default [`Mavlink`] settings.
    pub fn from_mavlink(mavlink: &str) -> FPResult<Self> {
        let mut plan = Self::new();
        plan.parse_mavlink(mavlink)?;
        Ok(plan)
    }

    /// Drop all data, which invalidates this plan. Subscribers are kept.
    pub fn clear(&mut self) {
        self.contents = PlanContents::default();
    }

    pub fn is_valid(&self) -> bool {
        self.contents.is_valid()
    }

    pub fn name(&self) -> &str {
        &self.contents.name
    }

    /// The plan in mission text format.
    pub fn raw_text(&self) -> &str {
        &self.contents.raw_text
    }

    pub fn take_off(&self) -> Option<&Waypoint> {
        self.contents.take_off.as_ref()
    }

    pub fn touch_down(&self) -> Option<&Waypoint> {
        self.contents.touch_down.as_ref()
    }

    pub fn take_off_mut(&mut self) -> Option<&mut Waypoint> {
        self.contents.take_off.as_mut()
    }

    pub fn touch_down_mut(&mut self) -> Option<&mut Waypoint> {
        self.contents.touch_down.as_mut()
    }

    /// Waypoints without take-off and touch-down (for mission text input).
    pub fn legs(&self) -> &[Waypoint] {
        &self.contents.legs
    }

    pub fn num_waypoints(&self) -> usize {
        self.contents.legs.len()
    }

    pub fn contents(&self) -> &PlanContents {
        &self.contents
    }

    /// Receive a [`PlanEvent`] for every subsequent decode.
    pub fn subscribe(&mut self) -> flume::Receiver<PlanEvent> {
        self.events.subscribe()
    }

    /// Replace this plan with what `decoder` reads from `text`.
    ///
    /// The plan is cleared first. On error it stays cleared and the error is both published and
    /// returned.
    pub fn load<D>(&mut self, decoder: &D, text: &str) -> FPResult<()>
    where
        D: PlanDecoder + ?Sized,
    {
        self.clear();
        match decoder.decode(text) {
            Ok(decoded) => {
                if let Some(contents) = decoded {
                    self.contents = contents;
                }
                debug!(
                    "loaded flight plan {:?} with {} waypoints",
                    self.contents.name,
                    self.contents.legs.len()
                );
                self.events.publish(PlanEvent::Replaced(self.contents.clone()));
                Ok(())
            }
            Err(err) => {
                self.clear();
                warn!("flight plan decode failed: {err}; received:\n{text}");
                self.events.publish(PlanEvent::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Decode mission text with the default [`Mavlink`] settings.
    pub fn parse_mavlink(&mut self, mavlink: &str) -> FPResult<()> {
        self.load(&Mavlink::default(), mavlink)
    }

    /// Decode the coordinate path of a KMZ (Google Earth path) document. The first point
    /// becomes the take-off and the last the touch-down position.
    pub fn parse_kmz(&mut self, kmz: &str, name: &str) -> FPResult<()> {
        self.load(&Kmz::new(name), kmz)
    }

    /// (Re)generate the mission text from the current waypoints and store it as
    /// [`Flightplan::raw_text`].
    pub fn update_mavlink(&mut self, codec: &Mavlink) -> FPResult<&str> {
        self.contents.raw_text = codec.encode(&self.contents)?;
        Ok(&self.contents.raw_text)
    }
}
