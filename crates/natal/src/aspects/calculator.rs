use crate::aspects::types::{AspectDefinition, ChartAspect, ASPECT_CATALOG};
use crate::chart::types::PlanetPosition;
use crate::western::zodiac::angular_separation;

/// Pairwise aspect detector over the fixed aspect catalog.
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Catalog entries matched by a separation (0-180), with their raw orb.
    pub fn matching_aspects(
        &self,
        separation: f64,
    ) -> impl Iterator<Item = (&'static AspectDefinition, f64)> {
        ASPECT_CATALOG.iter().filter_map(move |def| {
            let orb = (separation - def.exact_degrees).abs();
            (orb <= def.orb).then_some((def, orb))
        })
    }

    /// Aspects between every unordered pair of positions, tightest orb first.
    ///
    /// Pairs are visited in input order (i < j) and the sort is stable, so
    /// aspects with equal orbs keep that order.
    pub fn calculate_aspects(&self, positions: &[PlanetPosition]) -> Vec<ChartAspect> {
        let mut aspects = Vec::new();

        for (i, p1) in positions.iter().enumerate() {
            for p2 in &positions[i + 1..] {
                let separation = angular_separation(p1.total_degrees, p2.total_degrees);

                for (def, orb) in self.matching_aspects(separation) {
                    aspects.push(ChartAspect {
                        body1: p1.body,
                        body2: p2.body,
                        kind: def.kind,
                        symbol: def.symbol.to_string(),
                        exact_degrees: def.exact_degrees,
                        actual_degrees: separation,
                        orb: (orb * 100.0).round() / 100.0,
                        nature: def.nature,
                    });
                }
            }
        }

        aspects.sort_by(|a, b| a.orb.total_cmp(&b.orb));
        log::trace!("Found {} aspects among {} positions", aspects.len(), positions.len());
        aspects
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Aspects among chart positions using the default calculator.
pub fn calculate_aspects(positions: &[PlanetPosition]) -> Vec<ChartAspect> {
    AspectCalculator::new().calculate_aspects(positions)
}
