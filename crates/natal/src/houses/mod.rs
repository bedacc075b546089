pub mod angles;
pub mod equal;

pub use angles::{compute_ascendant, compute_midheaven, local_sidereal_time, obliquity};
pub use equal::{equal_house_cusps, house_for_longitude, HOUSE_COUNT};
