use crate::chart::assembler::calculate_natal_chart;
use crate::chart::types::{BirthData, BirthDefaults, NatalChart, PartialBirthData};
use crate::ephemeris::luminaries;
use crate::ephemeris::time::to_julian_day;
use crate::houses::angles;
use crate::western::signs::Sign;
use crate::western::sun_sign::calculate_sun_sign;
use crate::western::zodiac::{self, SignPosition};

/// Entry point bundling the chart operations behind one handle.
///
/// Holds only the defaults used to complete partial birth data.
#[derive(Debug, Clone, Default)]
pub struct ChartCalculator {
    defaults: BirthDefaults,
}

impl ChartCalculator {
    /// Calculator with built-in defaults (day 1, 12:00, 0°/0°, UTC).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: BirthDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &BirthDefaults {
        &self.defaults
    }

    pub fn calculate(&self, birth: &BirthData) -> NatalChart {
        calculate_natal_chart(birth)
    }

    /// Fill missing fields from the defaults, then cast the chart.
    pub fn calculate_partial(&self, partial: &PartialBirthData) -> NatalChart {
        if !partial.is_complete() {
            log::debug!("Completing partial birth data with {:?}", self.defaults);
        }
        calculate_natal_chart(&self.defaults.resolve(partial))
    }

    /// Sun sign from the calendar date alone.
    pub fn sun_sign(&self, month: u32, day: u32) -> Sign {
        calculate_sun_sign(month, day)
    }

    pub fn julian_day(&self, year: i32, month: u32, day: u32, hour: f64, minute: f64) -> f64 {
        to_julian_day(year, month, day, hour, minute)
    }

    pub fn sun_longitude(&self, jd: f64) -> f64 {
        luminaries::sun_longitude(jd)
    }

    pub fn moon_longitude(&self, jd: f64) -> f64 {
        luminaries::moon_longitude(jd)
    }

    /// Ascendant from local sidereal time, latitude and obliquity (degrees).
    pub fn ascendant(&self, lst: f64, latitude: f64, obliquity: f64) -> f64 {
        angles::compute_ascendant(lst, latitude, obliquity)
    }

    /// Midheaven from local sidereal time and obliquity (degrees).
    pub fn midheaven(&self, lst: f64, obliquity: f64) -> f64 {
        angles::compute_midheaven(lst, obliquity)
    }

    pub fn degrees_to_sign(&self, total_degrees: f64) -> SignPosition {
        zodiac::degrees_to_sign(total_degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_delegates() {
        let calc = ChartCalculator::new();
        assert_eq!(calc.sun_sign(3, 25), Sign::Aries);
        assert_eq!(calc.degrees_to_sign(120.0).sign, Sign::Leo);
        assert_eq!(calc.julian_day(2000, 1, 1, 12.0, 0.0), crate::ephemeris::J2000);
    }

    #[test]
    fn test_partial_and_resolved_charts_agree() {
        let calc = ChartCalculator::new();
        let partial = PartialBirthData::new(1990, 3);
        let resolved = calc.defaults().resolve(&partial);
        assert_eq!(calc.calculate_partial(&partial), calc.calculate(&resolved));
    }

    #[test]
    fn test_custom_defaults_are_used() {
        let defaults = BirthDefaults { hour: 6, latitude: 51.5, ..BirthDefaults::default() };
        let calc = ChartCalculator::with_defaults(defaults);
        let chart = calc.calculate_partial(&PartialBirthData::new(2000, 1));
        let expected = to_julian_day(2000, 1, 1, 6.0, 0.0);
        assert!((chart.julian_day - expected).abs() < 1e-9);
    }
}
