//! Obliquity, sidereal time and the two chart angles.
//!
//! All inputs and outputs are in degrees.

use crate::ephemeris::time::{julian_centuries, J2000};
use crate::util::normalize_degrees;

/// Mean obliquity of the ecliptic at a Julian Day.
pub fn obliquity(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    23.4392911 - 0.0130042 * t - 1.64e-7 * t * t + 5.036e-7 * t * t * t
}

/// Local sidereal time for a Julian Day (UT) and east-positive geographic
/// longitude.
pub fn local_sidereal_time(jd: f64, geo_longitude: f64) -> f64 {
    let t = julian_centuries(jd);
    let gmst = normalize_degrees(
        280.46061837 + 360.98564736629 * (jd - J2000) + 0.000387933 * t * t
            - t * t * t / 38710000.0,
    );
    normalize_degrees(gmst + geo_longitude)
}

/// Ecliptic longitude of the Ascendant.
///
/// `Asc = atan2(-cos LST, sin ε · tan φ + cos ε · sin LST)`
pub fn compute_ascendant(lst: f64, latitude: f64, obliquity: f64) -> f64 {
    let lst = lst.to_radians();
    let phi = latitude.to_radians();
    let eps = obliquity.to_radians();

    let y = -lst.cos();
    let x = eps.sin() * phi.tan() + eps.cos() * lst.sin();
    normalize_degrees(y.atan2(x).to_degrees())
}

/// Ecliptic longitude of the Midheaven.
///
/// `MC = atan2(sin LST, cos LST · cos ε)`
pub fn compute_midheaven(lst: f64, obliquity: f64) -> f64 {
    let lst = lst.to_radians();
    let eps = obliquity.to_radians();
    normalize_degrees(lst.sin().atan2(lst.cos() * eps.cos()).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 23.4392911;

    #[test]
    fn test_obliquity_at_j2000() {
        assert_abs_diff_eq!(obliquity(J2000), EPS, epsilon = 1e-12);
    }

    #[test]
    fn test_obliquity_decreases_over_the_century() {
        assert!(obliquity(J2000 + 36_525.0) < obliquity(J2000));
    }

    #[test]
    fn test_gmst_at_j2000() {
        assert_abs_diff_eq!(local_sidereal_time(J2000, 0.0), 280.46061837, epsilon = 1e-9);
    }

    #[test]
    fn test_lst_adds_east_longitude() {
        let greenwich = local_sidereal_time(J2000, 0.0);
        let east = local_sidereal_time(J2000, 15.0);
        assert_abs_diff_eq!(normalize_degrees(east - greenwich), 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_midheaven_on_cardinal_points() {
        assert_abs_diff_eq!(compute_midheaven(0.0, EPS), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(compute_midheaven(90.0, EPS), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(compute_midheaven(180.0, EPS), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(compute_midheaven(270.0, EPS), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn test_midheaven_stays_in_lst_quadrant() {
        for lst in [10.0, 100.0, 200.0, 300.0] {
            let mc = compute_midheaven(lst, EPS);
            assert_eq!((mc / 90.0).floor(), (lst / 90.0).floor(), "LST {} MC {}", lst, mc);
        }
    }

    #[test]
    fn test_ascendant_at_equator_with_zero_lst() {
        // tan φ = 0 and sin LST = 0 leave atan2(-1, 0).
        assert_abs_diff_eq!(compute_ascendant(0.0, 0.0, EPS), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ascendant_is_normalized() {
        for lst in (0..36).map(|i| i as f64 * 10.0) {
            for lat in [-60.0, -20.0, 0.0, 40.7, 65.0] {
                let asc = compute_ascendant(lst, lat, EPS);
                assert!((0.0..360.0).contains(&asc));
            }
        }
    }

    #[test]
    fn test_ascendant_sweeps_the_full_zodiac_in_a_sidereal_day() {
        let mut signs = [false; 12];
        for lst in (0..360).map(|i| i as f64) {
            let asc = compute_ascendant(lst, 40.7, EPS);
            signs[(asc / 30.0) as usize] = true;
        }
        assert!(signs.iter().all(|seen| *seen));
    }
}
