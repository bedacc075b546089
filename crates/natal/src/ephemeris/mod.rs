pub mod elements;
pub mod kepler;
pub mod luminaries;
pub mod orbit;
pub mod position;
pub mod time;
pub mod types;

pub use elements::{OrbitalElements, PropagatedElements};
pub use kepler::solve_kepler;
pub use luminaries::{moon_longitude, sun_longitude};
pub use orbit::{geocentric_longitude, heliocentric_longitude, heliocentric_position};
pub use position::{ecliptic_longitude, is_retrograde, longitude_delta};
pub use time::{julian_centuries, julian_day_from_datetime, to_julian_day, J2000};
pub use types::{Body, HeliocentricPosition, Planet};
