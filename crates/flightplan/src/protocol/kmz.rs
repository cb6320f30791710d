//! KMZ (Google Earth path) coordinates.
//!
//! Import only looks at the line right after the `<coordinates>` tag, which holds space
//! separated `longitude,latitude,altitude` triples. Export writes a KML `LineString` laid out
//! the same way.
use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};
use tracing::{debug, trace};

use super::{parse_f64, PlanDecoder, PlanEncoder};
use crate::{model::PlanContents, waypoint::Waypoint, Error, FPResult};

/// Point north.
pub const DEFAULT_BEARING: f64 = 0.0;
pub const DEFAULT_RADIUS_M: f64 = 2.0;

const COORDINATES_TAG: &str = "<coordinates>";
const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// KMZ path codec. KMZ documents carry no plan name, so it is supplied here, as are the
/// orientation and acceptance radius given to every imported waypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Kmz {
    pub name: String,
    pub bearing: f64,
    pub radius: f64,
}

impl Kmz {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            bearing: DEFAULT_BEARING,
            radius: DEFAULT_RADIUS_M,
        }
    }

    pub fn with_bearing(mut self, bearing: f64) -> Self {
        self.bearing = bearing;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    fn parse_point(&self, token: &str) -> FPResult<Waypoint> {
        let token: String = token.chars().filter(|c| !c.is_whitespace()).collect();
        let coords: Vec<&str> = token.split(',').collect();
        let [lon, lat, alt] = coords.as_slice() else {
            return Err(Error::MalformedInput(format!(
                "waypoint with invalid number of coordinates encountered: {token:?}"
            )));
        };
        Ok(Waypoint::new(
            parse_f64(lat)?,
            parse_f64(lon)?,
            parse_f64(alt)?,
            self.bearing,
            self.radius,
        ))
    }
}

impl PlanDecoder for Kmz {
    /// The path's first point becomes the take-off and its last point the touch-down position.
    /// Both stay part of the legs as well. The mission text is left empty.
    fn decode(&self, text: &str) -> FPResult<Option<PlanContents>> {
        if text.is_empty() {
            return Ok(None);
        }
        let mut lines = text.lines();
        if !lines.by_ref().any(|line| line.contains(COORDINATES_TAG)) {
            return Err(Error::MalformedInput(format!(
                "no {COORDINATES_TAG} tag in kmz content"
            )));
        }
        let path = lines.next().ok_or_else(|| {
            Error::MalformedInput(format!("nothing follows the {COORDINATES_TAG} tag"))
        })?;
        trace!("kmz path: {path:?}");

        let legs = path
            .trim()
            .split(' ')
            .map(|token| self.parse_point(token))
            .collect::<FPResult<Vec<_>>>()?;
        if legs.len() < 2 {
            return Err(Error::MalformedInput(
                "less than two waypoints could be extracted from kmz content".into(),
            ));
        }
        debug!("imported {} waypoints from kmz path", legs.len());

        Ok(Some(PlanContents {
            name: self.name.clone(),
            raw_text: String::new(),
            take_off: Some(legs[0]),
            touch_down: Some(legs[legs.len() - 1]),
            legs,
        }))
    }
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> FPResult<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Export(e.to_string()))
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> FPResult<()> {
    write_event(writer, Event::Start(BytesStart::new(tag)))?;
    write_event(writer, Event::Text(BytesText::new(text)))?;
    write_event(writer, Event::End(BytesEnd::new(tag)))
}

impl PlanEncoder for Kmz {
    /// Write take-off, legs and touch-down as one path. An endpoint at the same position as the
    /// adjacent leg is written once.
    fn encode(&self, plan: &PlanContents) -> FPResult<String> {
        let (Some(take_off), Some(touch_down)) = (&plan.take_off, &plan.touch_down) else {
            return Err(Error::PreconditionViolation(
                "take-off and touch-down positions are required to export a path".into(),
            ));
        };

        let mut path: Vec<&Waypoint> = Vec::with_capacity(plan.legs.len() + 2);
        if plan.legs.first().map(Waypoint::position) != Some(take_off.position()) {
            path.push(take_off);
        }
        path.extend(plan.legs.iter());
        if plan.legs.last().map(Waypoint::position) != Some(touch_down.position()) {
            path.push(touch_down);
        }
        let coordinates = path
            .iter()
            .map(|wp| format!("{:.6},{:.6},{:.6}", wp.longitude, wp.latitude, wp.altitude))
            .collect::<Vec<_>>()
            .join(" ");

        let name = if plan.name.is_empty() {
            &self.name
        } else {
            &plan.name
        };

        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        write_event(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
        write_event(
            &mut writer,
            Event::Start(BytesStart::new("kml").with_attributes([("xmlns", KML_NAMESPACE)])),
        )?;
        write_event(&mut writer, Event::Start(BytesStart::new("Document")))?;
        write_text_element(&mut writer, "name", name)?;
        write_event(&mut writer, Event::Start(BytesStart::new("Placemark")))?;
        write_text_element(&mut writer, "name", name)?;
        write_event(&mut writer, Event::Start(BytesStart::new("LineString")))?;
        write_text_element(&mut writer, "altitudeMode", "relativeToGround")?;
        write_event(&mut writer, Event::Start(BytesStart::new("coordinates")))?;
        // the importer expects the path on its own line
        write_event(
            &mut writer,
            Event::Text(BytesText::new(&format!("\n{coordinates}\n"))),
        )?;
        for tag in ["coordinates", "LineString", "Placemark", "Document", "kml"] {
            write_event(&mut writer, Event::End(BytesEnd::new(tag)))?;
        }

        debug!("exported {} waypoints to kml", path.len());
        String::from_utf8(writer.into_inner()).map_err(|e| Error::Export(e.to_string()))
    }
}
