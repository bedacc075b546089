//! Condensed view of a chart for narration layers.

use crate::aspects::types::AspectKind;
use crate::chart::types::NatalChart;
use crate::ephemeris::types::Body;
use crate::western::signs::Sign;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementSummary {
    pub body: Body,
    pub sign: Sign,
    pub degrees: f64,
    pub house: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectSummary {
    pub body1: Body,
    pub body2: Body,
    pub kind: AspectKind,
    pub orb: f64,
}

/// Big-three signs plus every placement and aspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSummary {
    pub sun_sign: Sign,
    pub moon_sign: Sign,
    pub rising_sign: Sign,
    pub placements: Vec<PlacementSummary>,
    pub aspects: Vec<AspectSummary>,
}

impl NatalChart {
    pub fn summary(&self) -> ChartSummary {
        ChartSummary {
            sun_sign: self.sun().sign,
            moon_sign: self.moon().sign,
            rising_sign: self.ascendant.sign,
            placements: self
                .planets()
                .map(|p| PlacementSummary {
                    body: p.body,
                    sign: p.sign,
                    degrees: p.degrees,
                    house: p.house,
                })
                .collect(),
            aspects: self
                .aspects
                .iter()
                .map(|a| AspectSummary {
                    body1: a.body1,
                    body2: a.body2,
                    kind: a.kind,
                    orb: a.orb,
                })
                .collect(),
        }
    }
}

impl fmt::Display for ChartSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Sun in {}, Moon in {}, {} rising",
            self.sun_sign, self.moon_sign, self.rising_sign
        )?;
        for p in &self.placements {
            writeln!(f, "{} {:.2}° {} (house {})", p.body, p.degrees, p.sign, p.house)?;
        }
        for a in &self.aspects {
            writeln!(f, "{} {} {} (orb {:.2}°)", a.body1, a.kind, a.body2, a.orb)?;
        }
        Ok(())
    }
}
