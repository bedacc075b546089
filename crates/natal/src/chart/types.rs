//! Chart input and output types.

use crate::aspects::types::ChartAspect;
use crate::ephemeris::time::to_julian_day;
use crate::ephemeris::types::Body;
use crate::error::ChartError;
use crate::houses::HOUSE_COUNT;
use crate::western::signs::Sign;
use crate::western::zodiac::SignPosition;
use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Birth moment and place. Fields are assumed valid; nothing is range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub year: i32,
    /// 1-12
    pub month: u32,
    pub day: u32,
    /// Local clock hour, 0-23
    pub hour: u32,
    pub minute: u32,
    /// Decimal degrees, north positive
    pub latitude: f64,
    /// Decimal degrees, east positive
    pub longitude: f64,
    /// Hours east of UTC (-5 for EST, 5.5 for IST)
    pub utc_offset: f64,
}

impl BirthData {
    /// Birth data from a local datetime; the offset becomes `utc_offset`.
    /// Seconds are dropped.
    pub fn from_datetime(dt: DateTime<FixedOffset>, latitude: f64, longitude: f64) -> Self {
        let offset_seconds = dt.offset().local_minus_utc();
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            latitude,
            longitude,
            utc_offset: offset_seconds as f64 / 3600.0,
        }
    }

    /// Universal Time hour; may fall outside 0-24 and roll the day.
    pub fn ut_hour(&self) -> f64 {
        self.hour as f64 - self.utc_offset
    }

    /// Julian Day of the birth moment (UT).
    pub fn julian_day(&self) -> f64 {
        to_julian_day(self.year, self.month, self.day, self.ut_hour(), self.minute as f64)
    }
}

/// Birth data where everything below the month may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialBirthData {
    pub year: i32,
    pub month: u32,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub utc_offset: Option<f64>,
}

impl PartialBirthData {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month, ..Self::default() }
    }

    /// True when every optional field is present.
    pub fn is_complete(&self) -> bool {
        self.day.is_some()
            && self.hour.is_some()
            && self.minute.is_some()
            && self.latitude.is_some()
            && self.longitude.is_some()
            && self.utc_offset.is_some()
    }
}

impl From<BirthData> for PartialBirthData {
    fn from(b: BirthData) -> Self {
        Self {
            year: b.year,
            month: b.month,
            day: Some(b.day),
            hour: Some(b.hour),
            minute: Some(b.minute),
            latitude: Some(b.latitude),
            longitude: Some(b.longitude),
            utc_offset: Some(b.utc_offset),
        }
    }
}

/// Values used for missing birth fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthDefaults {
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset: f64,
}

impl Default for BirthDefaults {
    fn default() -> Self {
        Self {
            day: 1,
            hour: 12,
            minute: 0,
            latitude: 0.0,
            longitude: 0.0,
            utc_offset: 0.0,
        }
    }
}

impl BirthDefaults {
    /// Fill the gaps in `partial`.
    pub fn resolve(&self, partial: &PartialBirthData) -> BirthData {
        BirthData {
            year: partial.year,
            month: partial.month,
            day: partial.day.unwrap_or(self.day),
            hour: partial.hour.unwrap_or(self.hour),
            minute: partial.minute.unwrap_or(self.minute),
            latitude: partial.latitude.unwrap_or(self.latitude),
            longitude: partial.longitude.unwrap_or(self.longitude),
            utc_offset: partial.utc_offset.unwrap_or(self.utc_offset),
        }
    }
}

/// One body's place in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub body: Body,
    pub sign: Sign,
    /// 0 <= degrees < 30
    pub degrees: f64,
    /// 0 <= total_degrees < 360
    pub total_degrees: f64,
    /// 1-12
    pub house: u8,
    pub retrograde: bool,
}

/// Anything that can be looked up in a chart: a body or one of the two angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ChartPoint {
    Body(Body),
    Ascendant,
    Midheaven,
}

impl ChartPoint {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartPoint::Body(body) => body.as_str(),
            ChartPoint::Ascendant => "ascendant",
            ChartPoint::Midheaven => "midheaven",
        }
    }
}

impl From<Body> for ChartPoint {
    fn from(body: Body) -> Self {
        ChartPoint::Body(body)
    }
}

impl fmt::Display for ChartPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartPoint {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ascendant" | "asc" => Ok(ChartPoint::Ascendant),
            "midheaven" | "mc" => Ok(ChartPoint::Midheaven),
            other => other
                .parse::<Body>()
                .map(ChartPoint::Body)
                .map_err(|_| ChartError::UnknownPoint { name: s.to_string() }),
        }
    }
}

impl From<ChartPoint> for String {
    fn from(point: ChartPoint) -> Self {
        point.as_str().to_string()
    }
}

impl TryFrom<String> for ChartPoint {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A chart point resolved to sign, house and motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub point: ChartPoint,
    pub sign: Sign,
    pub degrees: f64,
    pub total_degrees: f64,
    pub house: u8,
    pub retrograde: bool,
}

impl From<&PlanetPosition> for Placement {
    fn from(p: &PlanetPosition) -> Self {
        Self {
            point: ChartPoint::Body(p.body),
            sign: p.sign,
            degrees: p.degrees,
            total_degrees: p.total_degrees,
            house: p.house,
            retrograde: p.retrograde,
        }
    }
}

/// A computed natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    /// Julian Day (UT) the chart was cast for
    pub julian_day: f64,
    /// One entry per body, in [`Body::ALL`] order
    pub positions: [PlanetPosition; 10],
    pub ascendant: SignPosition,
    pub midheaven: SignPosition,
    /// Sorted by ascending orb
    pub aspects: Vec<ChartAspect>,
    /// Equal-house cusps; `house_cusps[0]` is the Ascendant
    pub house_cusps: [f64; HOUSE_COUNT],
}

impl NatalChart {
    /// The ten positions in canonical order (Sun first, Pluto last).
    pub fn planets(&self) -> impl Iterator<Item = &PlanetPosition> {
        self.positions.iter()
    }

    pub fn position(&self, body: Body) -> &PlanetPosition {
        &self.positions[body.index()]
    }

    pub fn sun(&self) -> &PlanetPosition {
        self.position(Body::Sun)
    }

    pub fn moon(&self) -> &PlanetPosition {
        self.position(Body::Moon)
    }

    /// Look up any chart point. The Ascendant sits in house 1 and the
    /// Midheaven in house 10; neither is ever retrograde.
    pub fn placement(&self, point: ChartPoint) -> Placement {
        let (angle, house) = match point {
            ChartPoint::Body(body) => return Placement::from(self.position(body)),
            ChartPoint::Ascendant => (&self.ascendant, 1),
            ChartPoint::Midheaven => (&self.midheaven, 10),
        };
        Placement {
            point,
            sign: angle.sign,
            degrees: angle.degrees,
            total_degrees: angle.total_degrees,
            house,
            retrograde: false,
        }
    }

    /// Aspects touching a body, tightest first.
    pub fn aspects_for(&self, body: Body) -> impl Iterator<Item = &ChartAspect> {
        self.aspects.iter().filter(move |a| a.involves(body))
    }
}
