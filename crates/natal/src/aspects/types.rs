use crate::ephemeris::types::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five Ptolemaic aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    /// Display name, e.g. "Conjunction".
    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Sextile => "Sextile",
            AspectKind::Square => "Square",
            AspectKind::Trine => "Trine",
            AspectKind::Opposition => "Opposition",
        }
    }

    pub fn definition(self) -> &'static AspectDefinition {
        // Catalog rows are in declaration order.
        &ASPECT_CATALOG[self as usize]
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectNature {
    Harmonious,
    Challenging,
    Neutral,
}

/// One row of the aspect catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    pub symbol: &'static str,
    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub exact_degrees: f64,
    /// Maximum allowed deviation from the exact angle
    pub orb: f64,
    pub nature: AspectNature,
}

pub static ASPECT_CATALOG: [AspectDefinition; 5] = [
    AspectDefinition {
        kind: AspectKind::Conjunction,
        symbol: "☌",
        exact_degrees: 0.0,
        orb: 8.0,
        nature: AspectNature::Neutral,
    },
    AspectDefinition {
        kind: AspectKind::Sextile,
        symbol: "⚹",
        exact_degrees: 60.0,
        orb: 6.0,
        nature: AspectNature::Harmonious,
    },
    AspectDefinition {
        kind: AspectKind::Square,
        symbol: "□",
        exact_degrees: 90.0,
        orb: 8.0,
        nature: AspectNature::Challenging,
    },
    AspectDefinition {
        kind: AspectKind::Trine,
        symbol: "△",
        exact_degrees: 120.0,
        orb: 8.0,
        nature: AspectNature::Harmonious,
    },
    AspectDefinition {
        kind: AspectKind::Opposition,
        symbol: "☍",
        exact_degrees: 180.0,
        orb: 8.0,
        nature: AspectNature::Challenging,
    },
];

/// An aspect found between two chart bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAspect {
    pub body1: Body,
    pub body2: Body,
    pub kind: AspectKind,
    pub symbol: String,
    pub exact_degrees: f64,
    /// Angular separation of the two bodies, 0-180
    pub actual_degrees: f64,
    /// Deviation from exact, rounded to 2 decimals
    pub orb: f64,
    pub nature: AspectNature,
}

impl ChartAspect {
    pub fn involves(&self, body: Body) -> bool {
        self.body1 == body || self.body2 == body
    }
}
