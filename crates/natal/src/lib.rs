//! Natal chart calculator.
//!
//! Computes the ecliptic positions of the ten chart bodies, the Ascendant and
//! Midheaven, equal-house cusps and the aspects between bodies from a birth
//! timestamp and location. Planets come from secular Keplerian elements, the
//! Sun and Moon from truncated Meeus series; results are good to about a
//! degree.
//!
//! ```no_run
//! use natal::{calculate_natal_chart, BirthData};
//!
//! let birth = BirthData {
//!     year: 1990,
//!     month: 3,
//!     day: 25,
//!     hour: 12,
//!     minute: 0,
//!     latitude: 40.7128,
//!     longitude: -74.0060,
//!     utc_offset: -5.0,
//! };
//! let chart = calculate_natal_chart(&birth);
//! println!("{}", chart.summary());
//! ```

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod western;

mod util;

pub use aspects::{calculate_aspects, AspectCalculator, AspectKind, AspectNature, ChartAspect};
pub use chart::{
    calculate_natal_chart, BirthData, BirthDefaults, ChartCalculator, ChartPoint, ChartSummary,
    NatalChart, PartialBirthData, Placement, PlanetPosition,
};
pub use ephemeris::{to_julian_day, Body, Planet};
pub use error::ChartError;
pub use western::{angular_separation, calculate_sun_sign, degrees_to_sign, Sign, SignPosition};
