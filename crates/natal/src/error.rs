use thiserror::Error;

/// Errors raised by identifier lookups.
///
/// Every variant is a caller mistake: the calculator itself only ever works
/// with the fixed sets of bodies and signs, so none of these can occur while
/// assembling a chart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Unknown body: {name}. Valid bodies: {valid:?}")]
    UnknownBody { name: String, valid: Vec<String> },
    #[error("No orbital elements for: {name}. Valid planets: {valid:?}")]
    UnknownPlanet { name: String, valid: Vec<String> },
    #[error("Unknown sign: {name}. Valid signs: {valid:?}")]
    UnknownSign { name: String, valid: Vec<String> },
    #[error("Unknown chart point: {name}")]
    UnknownPoint { name: String },
    #[error("Cannot compute geocentric longitude of Earth")]
    EarthIsObserver,
}
