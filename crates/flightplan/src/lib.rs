//! Flight plan library.
//!
//! A [`model::Flightplan`] holds an ordered path of [`waypoint::Waypoint`]s plus take-off and
//! touch-down positions. *Protocols* convert plans from and to external text formats by
//! implementing [`protocol::PlanDecoder`] and [`protocol::PlanEncoder`].
use std::sync::Once;

use thiserror::Error;

pub mod coord;
pub mod densify;
pub mod edit;
pub mod events;
pub mod model;
pub mod protocol;
pub mod waypoint;

pub use model::{Flightplan, PlanContents};
pub use waypoint::Waypoint;

/// Result type for this library
pub type FPResult<T> = std::result::Result<T, Error>;

/// Error type for this library
#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Invalid flight plan line encountered, line must end in \"1\": \"{0}\"")]
    InvalidCommandLine(String),
    #[error("Invalid flight plan name: {0}")]
    InvalidName(String),
    #[error("Invalid flight plan: {0}")]
    InvalidModel(String),
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),
    #[error("Invalid coordinate: {0}")]
    InvalidCoord(String),
    #[error("Export error: {0}")]
    Export(String),
}

impl From<nom::error::Error<&str>> for Error {
    fn from(err: nom::error::Error<&str>) -> Self {
        Error::MalformedInput(format!("{:?}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedInput(err.to_string())
    }
}

/// Test binary helper to init tracing. This is usually the responsibility of the consumer of the
/// library crate.
pub fn lazy_init_tracing() {
    {
        static INIT: Once = Once::new();
        &INIT
    }
    .call_once(|| {
        tracing_subscriber::fmt::init();
    });
}

#[cfg(test)]
pub(crate) mod testdata {
    /// Bebop style mission with a name comment. Take-off and touch-down carry a non-zero
    /// acceptance radius which the decoder drops.
    pub const SAMPLE_MAVLINK: &str = concat!(
        "QGC WPL 120\n",
        "// (name){Alpha}\n",
        "0\t1\t3\t22\t0.000000\t5.000000\t0.000000\t0.000000\t47.397742\t8.545594\t10.000000\t1\n",
        "1\t0\t3\t178\t1.000000\t2.000000\t-1.000000\t0.000000\t0.000000\t0.000000\t0.000000\t1\n",
        "2\t0\t3\t16\t1.000000\t2.000000\t0.000000\t90.000000\t47.398000\t8.546000\t20.000000\t1\n",
        "3\t0\t3\t16\t1.000000\t3.000000\t0.000000\t180.000000\t47.398500\t8.546500\t20.000000\t1\n",
        "4\t0\t3\t21\t0.000000\t5.000000\t0.000000\t45.000000\t47.397742\t8.545594\t0.000000\t1\n",
    );

    /// Google Earth path export.
    pub const SAMPLE_KML: &str = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<kml xmlns=\"http://www.opengis.net/kml/2.2\">\n",
        "<Document>\n",
        "\t<name>Survey.kmz</name>\n",
        "\t<Placemark>\n",
        "\t\t<name>Survey</name>\n",
        "\t\t<LineString>\n",
        "\t\t\t<tessellate>1</tessellate>\n",
        "\t\t\t<coordinates>\n",
        "\t\t\t\t8.545594,47.397742,0 8.546000,47.398000,10 8.546500,47.398500,20 \n",
        "\t\t\t</coordinates>\n",
        "\t\t</LineString>\n",
        "\t</Placemark>\n",
        "</Document>\n",
        "</kml>\n",
    );
}
