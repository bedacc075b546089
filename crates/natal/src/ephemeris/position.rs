use crate::ephemeris::luminaries::{moon_longitude, sun_longitude};
use crate::ephemeris::orbit::project_from_earth;
use crate::ephemeris::types::Body;
use crate::util::wrap_signed_degrees;

/// Geocentric ecliptic longitude of any chart body in degrees (0-360).
pub fn ecliptic_longitude(body: Body, jd: f64) -> f64 {
    match body.planet() {
        Some(planet) => project_from_earth(planet, jd),
        None if body == Body::Sun => sun_longitude(jd),
        None => moon_longitude(jd),
    }
}

/// Signed shortest-path motion between `jd - 1` and `jd + 1`, in [-180, 180].
pub fn longitude_delta(body: Body, jd: f64) -> f64 {
    let before = ecliptic_longitude(body, jd - 1.0);
    let after = ecliptic_longitude(body, jd + 1.0);
    wrap_signed_degrees(after - before)
}

/// Whether a body appears to move backwards along the ecliptic.
///
/// The luminaries are never retrograde in this model.
pub fn is_retrograde(body: Body, jd: f64) -> bool {
    if body.is_luminary() {
        return false;
    }
    longitude_delta(body, jd) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::time::{to_julian_day, J2000};

    #[test]
    fn test_luminaries_are_never_retrograde() {
        for step in 0..50 {
            let jd = J2000 + step as f64 * 37.0;
            assert!(!is_retrograde(Body::Sun, jd));
            assert!(!is_retrograde(Body::Moon, jd));
        }
    }

    #[test]
    fn test_flag_follows_delta_sign() {
        for step in 0..40 {
            let jd = J2000 + step as f64 * 29.0;
            for body in Body::ALL.iter().copied().filter(|b| !b.is_luminary()) {
                assert_eq!(is_retrograde(body, jd), longitude_delta(body, jd) < 0.0);
            }
        }
    }

    #[test]
    fn test_mercury_goes_retrograde_within_a_synodic_period() {
        // Mercury retrogrades roughly three times a year.
        let start = to_julian_day(2020, 1, 1, 0.0, 0.0);
        let retro_days = (0..116)
            .filter(|day| is_retrograde(Body::Mercury, start + *day as f64))
            .count();
        assert!(retro_days > 5 && retro_days < 60, "retro days {}", retro_days);
    }

    #[test]
    fn test_dispatch_uses_luminary_series() {
        assert_eq!(ecliptic_longitude(Body::Sun, J2000), sun_longitude(J2000));
        assert_eq!(ecliptic_longitude(Body::Moon, J2000), moon_longitude(J2000));
    }
}
