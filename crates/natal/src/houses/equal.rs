//! Equal house system: twelve 30° houses starting at the Ascendant.

use crate::util::normalize_degrees;

/// Number of houses in a chart.
pub const HOUSE_COUNT: usize = 12;

/// Cusp longitudes for houses 1..=12. `cusps[0]` is the Ascendant itself.
pub fn equal_house_cusps(ascendant: f64) -> [f64; HOUSE_COUNT] {
    let mut cusps = [0.0; HOUSE_COUNT];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_degrees(ascendant + i as f64 * 30.0);
    }
    cusps
}

/// House number (1-12) containing `longitude`.
///
/// Each house spans `[cusp, next_cusp)`, with the one wedge that crosses 0°
/// handled by the wrap branch. With well-formed cusps exactly one wedge
/// matches; a miss means the cusps are corrupt and falls back to house 1.
pub fn house_for_longitude(longitude: f64, cusps: &[f64; HOUSE_COUNT]) -> u8 {
    for i in 0..HOUSE_COUNT {
        let cusp = cusps[i];
        let next = cusps[(i + 1) % HOUSE_COUNT];

        let inside = if next > cusp {
            longitude >= cusp && longitude < next
        } else {
            longitude >= cusp || longitude < next
        };
        if inside {
            return (i + 1) as u8;
        }
    }

    debug_assert!(false, "no house contains {} with cusps {:?}", longitude, cusps);
    log::warn!("No house contains longitude {}; defaulting to house 1", longitude);
    1
}
