pub mod assembler;
pub mod calculator;
pub mod summary;
pub mod types;

pub use assembler::calculate_natal_chart;
pub use calculator::ChartCalculator;
pub use summary::{AspectSummary, ChartSummary, PlacementSummary};
pub use types::{
    BirthData, BirthDefaults, ChartPoint, NatalChart, PartialBirthData, Placement, PlanetPosition,
};
