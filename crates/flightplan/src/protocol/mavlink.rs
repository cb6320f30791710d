//! Mission text codec for the `QGC WPL 120` waypoint format as used by Bebop drones.
//!
//! Every command line holds 12 tab separated fields:
//!
//! | index | current | frame | command | param1 | param2 | param3 | param4 | lat | lon | alt | autocontinue |
//!
//! For navigation commands param1 is the hold time, param2 the acceptance radius and param4 the
//! yaw (orientation). The autocontinue field terminates each command and must be `1`.
//!
//! Decoding works on the *stringified* text, where line breaks and tabs appear as the two
//! character escapes `\n` and `\t` and the whole payload is wrapped in `"`. Plain text handed
//! to [`PlanDecoder::decode`] is stringified first; [`Mavlink::decode_escaped`] accepts text
//! which already is.
use tracing::{debug, trace};

use super::{parse_f64, PlanDecoder, PlanEncoder};
use crate::{model::PlanContents, waypoint::Waypoint, Error, FPResult};

pub const HEADER_MARKER: &str = "QGC WPL";
pub const HEADER_VERSION: &str = "120";

pub const DEFAULT_HOLD_TIME_S: f64 = 1.0;
pub const DEFAULT_VELOCITY_MPS: f64 = 2.0;

const ESCAPED_NEWLINE: &str = "\\n";
const ESCAPED_TAB: &str = "\\t";
const ESCAPED_CR: &str = "\\r";
const COMMENT_MARKER: &str = "//";
const NAME_MARKER: &str = "(name)";
/// Lines containing this are never data lines in the comment dialect.
const HEADER_TOKEN: &str = "QGC";

const NUM_FIELDS: usize = 12;
const COMMAND_TERMINATOR: f64 = 1.0;

const FRAME_GLOBAL_RELATIVE_ALT: u8 = 3;
const SPEED_TYPE_GROUND: f64 = 1.0;
const THROTTLE_UNCHANGED: f64 = -1.0;
const CAMERA_PITCH_DEG: f64 = 0.0;
const MOUNT_MODE_MAVLINK_TARGETING: f64 = 2.0;
const CAPTURE_INTERVAL_S: f64 = 2.0;

/// Mission commands emitted or understood by this codec.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u16)]
pub enum MavCmd {
    NavWaypoint = 16,
    NavLand = 21,
    NavTakeoff = 22,
    DoChangeSpeed = 178,
    DoMountControl = 205,
    VideoStartCapture = 2500,
    VideoStopCapture = 2501,
}

impl MavCmd {
    pub fn code(self) -> u16 {
        self as u16
    }
}

impl TryFrom<f64> for MavCmd {
    type Error = f64;

    /// Accepts both the integer (`16`) and the fixed point (`16.000000`) rendering.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.fract() != 0.0 {
            return Err(value);
        }
        let cmd = match value as i64 {
            16 => MavCmd::NavWaypoint,
            21 => MavCmd::NavLand,
            22 => MavCmd::NavTakeoff,
            178 => MavCmd::DoChangeSpeed,
            205 => MavCmd::DoMountControl,
            2500 => MavCmd::VideoStartCapture,
            2501 => MavCmd::VideoStopCapture,
            _ => return Err(value),
        };
        Ok(cmd)
    }
}

/// Where the plan name lives in the mission text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum NameDialect {
    /// A comment line such as `// (name){Alpha}`.
    #[default]
    Comment,
    /// The first line: `QGC WPL 120 Alpha`.
    Header,
}

/// Mission text codec and its settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Mavlink {
    pub dialect: NameDialect,
    /// Time to wait at each waypoint in seconds.
    pub hold_time_s: f64,
    /// Cruise velocity in m/s.
    pub velocity_mps: f64,
}

impl Default for Mavlink {
    fn default() -> Self {
        Self {
            dialect: NameDialect::default(),
            hold_time_s: DEFAULT_HOLD_TIME_S,
            velocity_mps: DEFAULT_VELOCITY_MPS,
        }
    }
}

enum Line<'a> {
    Header(&'a str),
    Comment(&'a str),
    Data(Vec<&'a str>),
    Ignored,
}

impl Mavlink {
    pub fn with_dialect(mut self, dialect: NameDialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_hold_time(mut self, hold_time_s: f64) -> Self {
        self.hold_time_s = hold_time_s;
        self
    }

    pub fn with_velocity(mut self, velocity_mps: f64) -> Self {
        self.velocity_mps = velocity_mps;
        self
    }

    /// Decode stringified mission text: `"` wrapped, with escaped line breaks and tabs.
    pub fn decode_escaped(&self, quoted: &str) -> FPResult<Option<PlanContents>> {
        let quoted = quoted.trim();
        // '""' denotes "no flight plan available"
        if quoted.len() <= 2 {
            return Ok(None);
        }
        let payload = quoted
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .ok_or_else(|| Error::MalformedInput("mission text is not quoted".into()))?;
        let raw_text: String = serde_json::from_str(quoted)?;

        let mut contents = self.parse_payload(payload)?;
        if contents.name.is_empty() {
            return Err(Error::InvalidName(
                "could not extract a flight plan name from the mission text".into(),
            ));
        }
        contents.raw_text = raw_text;
        if !contents.is_valid() {
            return Err(Error::InvalidModel(
                "could not extract a valid flight plan from the mission text".into(),
            ));
        }
        Ok(Some(contents))
    }

    fn parse_payload(&self, payload: &str) -> FPResult<PlanContents> {
        let lines: Vec<&str> = payload.split(ESCAPED_NEWLINE).collect();
        if lines.len() < 3 {
            return Err(Error::MalformedInput(format!(
                "too few statements, {} lines could be parsed",
                lines.len()
            )));
        }

        let mut contents = PlanContents::default();
        for (i, line) in lines.into_iter().enumerate() {
            let line = line.strip_suffix(ESCAPED_CR).unwrap_or(line);
            match self.classify(i, line) {
                Line::Header(name) => {
                    trace!("header line {i}, name {name:?}");
                    contents.name = name.to_string();
                }
                Line::Comment(comment) => {
                    if comment.contains(NAME_MARKER) {
                        contents.name = parse_bracketed_name(comment)?.to_string();
                        trace!("name comment on line {i}: {:?}", contents.name);
                    }
                }
                Line::Data(fields) => parse_command(&fields, &mut contents)?,
                Line::Ignored => trace!("ignoring line {i}: {line:?}"),
            }
        }
        debug!(
            "parsed mission text {:?}: {} waypoints",
            contents.name,
            contents.legs.len()
        );
        Ok(contents)
    }

    fn classify<'a>(&self, index: usize, line: &'a str) -> Line<'a> {
        match self.dialect {
            NameDialect::Header => {
                if index == 0 {
                    if let Some(name) = header_name(line) {
                        return Line::Header(name);
                    }
                }
                if line.contains(COMMENT_MARKER) {
                    return Line::Ignored;
                }
            }
            NameDialect::Comment => {
                if line.contains(COMMENT_MARKER) {
                    return Line::Comment(line);
                }
                if line.contains(HEADER_TOKEN) {
                    return Line::Ignored;
                }
            }
        }
        let fields: Vec<&str> = line.trim().split(ESCAPED_TAB).collect();
        if fields.len() == NUM_FIELDS {
            Line::Data(fields)
        } else {
            Line::Ignored
        }
    }

    /// Rejects names the decoder would not read back unchanged.
    fn validate_name(&self, name: &str) -> FPResult<()> {
        if name.is_empty() {
            return Err(Error::InvalidName("flight plan has no name".into()));
        }
        if let Some(c) = name
            .chars()
            .find(|&c| matches!(c, '{' | '}' | '"' | '\\') || c.is_control())
        {
            return Err(Error::InvalidName(format!(
                "{c:?} not allowed in flight plan name {name:?}"
            )));
        }
        if self.dialect == NameDialect::Header && name.trim() != name {
            return Err(Error::InvalidName(format!(
                "flight plan name {name:?} has surrounding whitespace"
            )));
        }
        Ok(())
    }

    fn header_line(&self, name: &str) -> String {
        match self.dialect {
            NameDialect::Comment => {
                format!("{HEADER_MARKER} {HEADER_VERSION} {COMMENT_MARKER} {NAME_MARKER}{{{name}}}\n")
            }
            NameDialect::Header => format!("{HEADER_MARKER} {HEADER_VERSION} {name}\n"),
        }
    }
}

/// Name from a `QGC WPL 120 <name>` line, trimmed.
fn header_name(line: &str) -> Option<&str> {
    let rest = line
        .trim_start()
        .strip_prefix(HEADER_MARKER)?
        .trim_start()
        .strip_prefix(HEADER_VERSION)?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim())
}

/// Text between the first `{` and the first `}`.
fn parse_bracketed_name(line: &str) -> FPResult<&str> {
    match (line.find('{'), line.find('}')) {
        (Some(open), Some(close)) if close > open => Ok(&line[open + 1..close]),
        _ => Err(Error::InvalidName(format!("unbalanced name markers: {line:?}"))),
    }
}

fn parse_command(fields: &[&str], contents: &mut PlanContents) -> FPResult<()> {
    if parse_f64(fields[11]).ok() != Some(COMMAND_TERMINATOR) {
        return Err(Error::InvalidCommandLine(fields.join("\t")));
    }
    let Ok(cmd) = parse_f64(fields[3]).map(MavCmd::try_from) else {
        trace!("ignoring unreadable command {:?}", fields[3]);
        return Ok(());
    };
    match cmd {
        Ok(MavCmd::NavTakeoff) => contents.take_off = Some(waypoint(fields, None)?),
        Ok(MavCmd::NavLand) => contents.touch_down = Some(waypoint(fields, None)?),
        Ok(MavCmd::NavWaypoint) => contents.legs.push(waypoint(fields, Some(fields[5]))?),
        other => trace!("ignoring command {other:?}"),
    }
    Ok(())
}

fn waypoint(fields: &[&str], radius: Option<&str>) -> FPResult<Waypoint> {
    Ok(Waypoint::new(
        parse_f64(fields[8])?,
        parse_f64(fields[9])?,
        parse_f64(fields[10])?,
        parse_f64(fields[7])?,
        radius.map(parse_f64).transpose()?.unwrap_or(0.0),
    ))
}

impl PlanDecoder for Mavlink {
    fn decode(&self, text: &str) -> FPResult<Option<PlanContents>> {
        self.decode_escaped(&serde_json::to_string(text)?)
    }
}

/// Appends numbered command lines.
struct MissionWriter {
    text: String,
    index: u32,
}

impl MissionWriter {
    fn new(header: String) -> Self {
        Self {
            text: header,
            index: 0,
        }
    }

    fn command(&mut self, cmd: MavCmd, params: [f64; 4], position: [f64; 3]) {
        let current = u8::from(self.index == 0);
        let [p1, p2, p3, p4] = params;
        let [lat, lon, alt] = position;
        let line = format!(
            "{}\t{current}\t{FRAME_GLOBAL_RELATIVE_ALT}\t{}\t{p1:.6}\t{p2:.6}\t{p3:.6}\t{p4:.6}\t{lat:.6}\t{lon:.6}\t{alt:.6}\t{COMMAND_TERMINATOR}\n",
            self.index,
            cmd.code(),
        );
        trace!("{}", line.trim_end());
        self.text.push_str(&line);
        self.index += 1;
    }

    fn navigate(&mut self, cmd: MavCmd, hold_time_s: f64, wp: &Waypoint, radius: f64) {
        self.command(
            cmd,
            [hold_time_s, radius, 0.0, wp.orientation],
            [wp.latitude, wp.longitude, wp.altitude],
        );
    }
}

impl PlanEncoder for Mavlink {
    fn encode(&self, plan: &PlanContents) -> FPResult<String> {
        let (Some(take_off), Some(touch_down)) = (&plan.take_off, &plan.touch_down) else {
            return Err(Error::PreconditionViolation(
                "take-off and touch-down positions are required to generate mission text".into(),
            ));
        };
        if plan.legs.is_empty() {
            return Err(Error::PreconditionViolation(
                "at least one waypoint is required to generate mission text".into(),
            ));
        }

        self.validate_name(&plan.name)?;

        let mut out = MissionWriter::new(self.header_line(&plan.name));
        out.navigate(MavCmd::NavTakeoff, 0.0, take_off, 0.0);
        out.command(
            MavCmd::DoChangeSpeed,
            [SPEED_TYPE_GROUND, self.velocity_mps, THROTTLE_UNCHANGED, 0.0],
            [0.0; 3],
        );
        out.command(
            MavCmd::DoMountControl,
            [CAMERA_PITCH_DEG, 0.0, 0.0, 0.0],
            [0.0, 0.0, MOUNT_MODE_MAVLINK_TARGETING],
        );
        out.command(
            MavCmd::VideoStartCapture,
            [0.0, CAPTURE_INTERVAL_S, 0.0, 0.0],
            [0.0; 3],
        );
        for wp in plan.legs.iter() {
            out.navigate(MavCmd::NavWaypoint, self.hold_time_s, wp, wp.radius);
        }
        out.command(MavCmd::VideoStopCapture, [0.0; 4], [0.0; 3]);
        out.navigate(MavCmd::NavLand, 0.0, touch_down, 0.0);

        debug!(
            "generated mission text for {:?}: {} commands",
            plan.name, out.index
        );
        Ok(out.text)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{lazy_init_tracing, testdata::SAMPLE_MAVLINK};

    fn decode(text: &str) -> FPResult<Option<PlanContents>> {
        Mavlink::default().decode(text)
    }

    fn sample_plan() -> PlanContents {
        PlanContents {
            name: "Alpha".into(),
            raw_text: String::new(),
            take_off: Some(Waypoint::new(47.397742, 8.545594, 10.0, 0.0, 0.0)),
            touch_down: Some(Waypoint::new(47.397742, 8.545594, 0.0, 45.0, 0.0)),
            legs: vec![Waypoint::new(47.398, 8.546, 20.0, 90.0, 2.0)],
        }
    }

    #[test]
    fn test_decode_sample() {
        lazy_init_tracing();
        let plan = decode(SAMPLE_MAVLINK).unwrap().unwrap();
        assert_eq!(plan.name, "Alpha");
        assert_eq!(plan.raw_text, SAMPLE_MAVLINK);
        // take-off and touch-down radius is forced to zero
        assert_eq!(
            plan.take_off,
            Some(Waypoint::new(47.397742, 8.545594, 10.0, 0.0, 0.0))
        );
        assert_eq!(
            plan.touch_down,
            Some(Waypoint::new(47.397742, 8.545594, 0.0, 45.0, 0.0))
        );
        assert_eq!(
            plan.legs,
            vec![
                Waypoint::new(47.398, 8.546, 20.0, 90.0, 2.0),
                Waypoint::new(47.3985, 8.5465, 20.0, 180.0, 3.0),
            ]
        );
        assert!(plan.is_valid());
    }

    #[test]
    fn test_decode_escaped_matches_plain() {
        lazy_init_tracing();
        let quoted = serde_json::to_string(SAMPLE_MAVLINK).unwrap();
        assert!(quoted.contains("\\n") && quoted.contains("\\t"));
        let escaped = Mavlink::default().decode_escaped(&quoted).unwrap();
        assert_eq!(escaped, decode(SAMPLE_MAVLINK).unwrap());

        for bad in [
            "not quoted",
            "\"QGC WPL 120\\n// (name){A}\\n0\\t1\\q\"",
        ] {
            let err = Mavlink::default().decode_escaped(bad).unwrap_err();
            assert!(matches!(err, Error::MalformedInput(_)), "{bad}: {err:?}");
        }
    }

    #[test]
    fn test_decode_empty_is_no_plan() {
        assert_eq!(decode("").unwrap(), None);
        assert_eq!(Mavlink::default().decode_escaped("\"\"").unwrap(), None);
        assert_eq!(Mavlink::default().decode_escaped(" \"\" ").unwrap(), None);
    }

    #[test]
    fn test_decode_too_few_statements() {
        let err = decode("QGC WPL 120\n// (name){Alpha}").unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)), "{err:?}");
    }

    #[test]
    fn test_decode_bad_terminator() {
        lazy_init_tracing();
        let bad = SAMPLE_MAVLINK.replace("8.546000\t20.000000\t1\n", "8.546000\t20.000000\t0\n");
        match decode(&bad).unwrap_err() {
            Error::InvalidCommandLine(line) => {
                assert!(line.starts_with("2\t0\t3\t16\t"), "{line:?}");
                assert!(line.ends_with("\t0"), "{line:?}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_decode_names() {
        lazy_init_tracing();
        let with_name = |comment: &str| SAMPLE_MAVLINK.replace("// (name){Alpha}", comment);

        let plan = decode(&with_name("// some comment (name){Bravo Two} more"))
            .unwrap()
            .unwrap();
        assert_eq!(plan.name, "Bravo Two");

        for comment in [
            "// (name){}",
            "// (name)}Alpha{",
            "// (name) Alpha",
            "// (name){Alpha",
            "// no name here",
        ] {
            let err = decode(&with_name(comment)).unwrap_err();
            assert!(matches!(err, Error::InvalidName(_)), "{comment}: {err:?}");
        }
    }

    #[test]
    fn test_decode_header_dialect() {
        lazy_init_tracing();
        let codec = Mavlink::default().with_dialect(NameDialect::Header);
        let text = SAMPLE_MAVLINK
            .replace("QGC WPL 120\n", "QGC WPL 120   Bravo \n")
            .replace("// (name){Alpha}\n", "");
        let plan = codec.decode(&text).unwrap().unwrap();
        assert_eq!(plan.name, "Bravo");
        assert_eq!(plan.legs.len(), 2);

        // the dialects do not mix
        assert!(matches!(
            codec.decode(SAMPLE_MAVLINK).unwrap_err(),
            Error::InvalidName(_)
        ));
        assert!(matches!(
            Mavlink::default().decode(&text).unwrap_err(),
            Error::InvalidName(_)
        ));

        assert_eq!(header_name("QGC WPL 120 Bravo"), Some("Bravo"));
        assert_eq!(header_name("QGC WPL 1200 Bravo"), None);
        assert_eq!(header_name("0\t1\t3\t22"), None);
    }

    #[test]
    fn test_decode_ignores_unknown_lines() {
        lazy_init_tracing();
        let text = SAMPLE_MAVLINK.replace(
            "// (name){Alpha}\n",
            "// (name){Alpha}\n\
             7\t0\t3\t16\t1.0\t2.0\t0.0\t0.0\t1.0\t1.0\t1.0\n\
             8\t0\t3\t205\t0.0\t0.0\t0.0\t0.0\t0.0\t0.0\t2.0\t1\n\
             9\t0\t3\tXY\t0.0\t0.0\t0.0\t0.0\t0.0\t0.0\t0.0\t1\n\
             \n",
        );
        let plan = decode(&text).unwrap().unwrap();
        assert_eq!(plan.legs.len(), 2);
    }

    #[test]
    fn test_decode_accepts_crlf_and_fixed_point_commands() {
        lazy_init_tracing();
        let text = SAMPLE_MAVLINK
            .replace("\t16\t", "\t16.000000\t")
            .replace("\t1\n", "\t1.000000\r\n");
        let plan = decode(&text).unwrap().unwrap();
        assert_eq!(plan.legs.len(), 2);
        assert!(plan.take_off.is_some() && plan.touch_down.is_some());
    }

    #[test]
    fn test_decode_invalid_model() {
        lazy_init_tracing();
        let no_touch_down: String = SAMPLE_MAVLINK
            .lines()
            .filter(|line| !line.starts_with("4\t"))
            .map(|line| format!("{line}\n"))
            .collect();
        let err = decode(&no_touch_down).unwrap_err();
        assert!(matches!(err, Error::InvalidModel(_)), "{err:?}");

        let out_of_range = SAMPLE_MAVLINK.replace("47.398500", "97.398500");
        let err = decode(&out_of_range).unwrap_err();
        assert!(matches!(err, Error::InvalidModel(_)), "{err:?}");

        let unreadable = SAMPLE_MAVLINK.replace("47.398500", "north");
        let err = decode(&unreadable).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)), "{err:?}");
    }

    #[test]
    fn test_encode() {
        lazy_init_tracing();
        let text = Mavlink::default().encode(&sample_plan()).unwrap();
        let expected = concat!(
            "QGC WPL 120 // (name){Alpha}\n",
            "0\t1\t3\t22\t0.000000\t0.000000\t0.000000\t0.000000\t47.397742\t8.545594\t10.000000\t1\n",
            "1\t0\t3\t178\t1.000000\t2.000000\t-1.000000\t0.000000\t0.000000\t0.000000\t0.000000\t1\n",
            "2\t0\t3\t205\t0.000000\t0.000000\t0.000000\t0.000000\t0.000000\t0.000000\t2.000000\t1\n",
            "3\t0\t3\t2500\t0.000000\t2.000000\t0.000000\t0.000000\t0.000000\t0.000000\t0.000000\t1\n",
            "4\t0\t3\t16\t1.000000\t2.000000\t0.000000\t90.000000\t47.398000\t8.546000\t20.000000\t1\n",
            "5\t0\t3\t2501\t0.000000\t0.000000\t0.000000\t0.000000\t0.000000\t0.000000\t0.000000\t1\n",
            "6\t0\t3\t21\t0.000000\t0.000000\t0.000000\t45.000000\t47.397742\t8.545594\t0.000000\t1\n",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_encode_settings() {
        let codec = Mavlink::default()
            .with_dialect(NameDialect::Header)
            .with_hold_time(3.5)
            .with_velocity(7.25);
        let text = codec.encode(&sample_plan()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "QGC WPL 120 Alpha");
        assert!(lines[2].starts_with("1\t0\t3\t178\t1.000000\t7.250000\t"));
        assert!(lines[5].starts_with("4\t0\t3\t16\t3.500000\t2.000000\t"));
        for (i, line) in lines[1..].iter().enumerate() {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields.len(), 12);
            assert_eq!(fields[0], i.to_string());
            assert_eq!(fields[11], "1");
        }
    }

    #[test]
    fn test_encode_preconditions() {
        let mut plan = sample_plan();
        plan.legs.clear();
        let err = Mavlink::default().encode(&plan).unwrap_err();
        assert!(matches!(err, Error::PreconditionViolation(_)), "{err:?}");

        let mut plan = sample_plan();
        plan.take_off = None;
        let err = Mavlink::default().encode(&plan).unwrap_err();
        assert!(matches!(err, Error::PreconditionViolation(_)), "{err:?}");
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        lazy_init_tracing();
        for dialect in [NameDialect::Comment, NameDialect::Header] {
            let codec = Mavlink::default().with_dialect(dialect);
            let plan = sample_plan();
            let text = codec.encode(&plan).unwrap();
            let decoded = codec.decode(&text).unwrap().unwrap();
            assert_eq!(decoded.name, plan.name);
            assert_eq!(decoded.take_off, plan.take_off);
            assert_eq!(decoded.touch_down, plan.touch_down);
            assert_eq!(decoded.legs, plan.legs);
            assert_eq!(decoded.raw_text, text);
        }
    }

    #[test]
    fn test_encode_names() {
        lazy_init_tracing();
        for dialect in [NameDialect::Comment, NameDialect::Header] {
            let codec = Mavlink::default().with_dialect(dialect);
            for name in ["Alpha", "Bravo Two", "survey (north) // 3", "Zürich 2024"] {
                let mut plan = sample_plan();
                plan.name = name.into();
                let text = codec.encode(&plan).unwrap();
                let decoded = codec.decode(&text).unwrap().unwrap();
                assert_eq!(decoded.name, name, "{dialect:?}");
            }
            let unreadable = [
                "",
                "A}B",
                "A{B",
                "Say \"hi\"",
                "C:\\dir",
                "tab\there",
                "two\nlines",
            ];
            for name in unreadable {
                let mut plan = sample_plan();
                plan.name = name.into();
                let err = codec.encode(&plan).unwrap_err();
                assert!(matches!(err, Error::InvalidName(_)), "{name:?}: {err:?}");
            }
        }

        let mut plan = sample_plan();
        plan.name = " Alpha ".into();
        let text = Mavlink::default().encode(&plan).unwrap();
        assert_eq!(Mavlink::default().decode(&text).unwrap().unwrap().name, " Alpha ");
        let err = Mavlink::default()
            .with_dialect(NameDialect::Header)
            .encode(&plan)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidName(_)), "{err:?}");
    }

    #[test]
    fn test_mav_cmd_codes() {
        assert_eq!(MavCmd::try_from(22.0), Ok(MavCmd::NavTakeoff));
        assert_eq!(MavCmd::try_from(16.0), Ok(MavCmd::NavWaypoint));
        assert_eq!(MavCmd::try_from(16.5), Err(16.5));
        assert_eq!(MavCmd::try_from(99.0), Err(99.0));
        assert_eq!(MavCmd::try_from(2500.0), Ok(MavCmd::VideoStartCapture));
        assert_eq!(MavCmd::try_from(2000.0), Err(2000.0));
        assert_eq!(MavCmd::VideoStopCapture.code(), 2501);
    }
}
