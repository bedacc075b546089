pub mod calculator;
pub mod types;

pub use calculator::{calculate_aspects, AspectCalculator};
pub use types::{AspectDefinition, AspectKind, AspectNature, ChartAspect, ASPECT_CATALOG};
