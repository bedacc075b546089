//! Heliocentric propagation and projection to geocentric longitude.

use crate::ephemeris::elements::{OrbitalElements, PropagatedElements};
use crate::ephemeris::kepler::{solve_kepler, true_anomaly};
use crate::ephemeris::time::julian_centuries;
use crate::ephemeris::types::{HeliocentricPosition, Planet};
use crate::error::ChartError;
use crate::util::normalize_degrees;

/// Radius, true anomaly and elements of a planet's orbit at `jd`.
fn solve_orbit(planet: Planet, jd: f64) -> (PropagatedElements, f64, f64) {
    let t = julian_centuries(jd);
    let el = OrbitalElements::of(planet).at(t);
    let e = el.eccentricity;

    let ecc_anomaly = solve_kepler(el.mean_anomaly().to_radians(), e);
    let v = true_anomaly(ecc_anomaly, e).to_degrees();
    let radius = el.semi_major_axis * (1.0 - e * ecc_anomaly.cos());
    (el, radius, v)
}

/// Heliocentric radius and ecliptic longitude of a planet.
///
/// The orbital-plane longitude is folded onto the ecliptic with the
/// small-inclination projection `atan2(sin u · cos i, cos u) + Ω`. That is a
/// deliberate low-order approximation; all inclinations here are under 18°.
pub fn heliocentric_position(planet: Planet, jd: f64) -> HeliocentricPosition {
    let (el, radius, v) = solve_orbit(planet, jd);

    // Argument of latitude
    let u = normalize_degrees(v + el.perihelion - el.ascending_node).to_radians();
    let i = el.inclination.to_radians();
    let projected = (u.sin() * i.cos()).atan2(u.cos()).to_degrees();

    HeliocentricPosition {
        radius,
        longitude: normalize_degrees(projected + el.ascending_node),
    }
}

/// Radius and orbital longitude `v + ϖ`, treating the orbit as lying in the
/// ecliptic. This is the form the geocentric projection is built from.
pub(crate) fn in_plane_position(planet: Planet, jd: f64) -> HeliocentricPosition {
    let (el, radius, v) = solve_orbit(planet, jd);
    HeliocentricPosition {
        radius,
        longitude: normalize_degrees(v + el.perihelion),
    }
}

/// Heliocentric ecliptic longitude in degrees (0-360).
pub fn heliocentric_longitude(planet: Planet, jd: f64) -> f64 {
    heliocentric_position(planet, jd).longitude
}

/// Apparent ecliptic longitude of a planet as seen from Earth.
///
/// Both bodies are placed in the ecliptic at their orbital longitude
/// `v + ϖ`, without the inclination fold, and differenced. Asking for Earth itself is an error.
pub fn geocentric_longitude(planet: Planet, jd: f64) -> Result<f64, ChartError> {
    if planet == Planet::Earth {
        return Err(ChartError::EarthIsObserver);
    }
    Ok(project_from_earth(planet, jd))
}

/// Geocentric longitude without the Earth check; callers guarantee `planet`
/// is not Earth.
pub(crate) fn project_from_earth(planet: Planet, jd: f64) -> f64 {
    let (earth_x, earth_y) = in_plane_position(Planet::Earth, jd).to_cartesian();
    let (x, y) = in_plane_position(planet, jd).to_cartesian();
    normalize_degrees((y - earth_y).atan2(x - earth_x).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::time::{to_julian_day, J2000};

    #[test]
    fn test_earth_is_rejected() {
        assert_eq!(
            geocentric_longitude(Planet::Earth, J2000),
            Err(ChartError::EarthIsObserver)
        );
    }

    #[test]
    fn test_earth_radius_near_one_au() {
        for offset in [0.0, 91.0, 182.0, 273.0] {
            let pos = heliocentric_position(Planet::Earth, J2000 + offset);
            assert!((pos.radius - 1.0).abs() < 0.02, "r={}", pos.radius);
        }
    }

    #[test]
    fn test_earth_opposes_the_sun_at_j2000() {
        // The Sun sits near 280.5° on 2000-01-01, so Earth is near 100.5°.
        let lon = heliocentric_longitude(Planet::Earth, J2000);
        assert!((lon - 100.4).abs() < 1.0, "Earth at {}", lon);
    }

    #[test]
    fn test_radii_stay_within_perihelion_and_aphelion() {
        for planet in Planet::ALL {
            let el = OrbitalElements::of(planet);
            let pos = heliocentric_position(planet, J2000 + 1234.5);
            let a = el.semi_major_axis;
            let e = el.eccentricity + 0.01;
            assert!(pos.radius >= a * (1.0 - e) && pos.radius <= a * (1.0 + e));
        }
    }

    #[test]
    fn test_outer_planets_far_from_earth_barely_move_in_a_day() {
        let a = geocentric_longitude(Planet::Pluto, J2000).unwrap();
        let b = geocentric_longitude(Planet::Pluto, J2000 + 1.0).unwrap();
        let diff = crate::util::wrap_signed_degrees(b - a).abs();
        assert!(diff < 0.1, "Pluto moved {} in a day", diff);
    }

    #[test]
    fn test_pluto_geocentric_longitude_is_pinned() {
        // Cartesian difference of unfolded `v + ϖ` longitudes.
        let j2000 = geocentric_longitude(Planet::Pluto, J2000).unwrap();
        assert!((j2000 - 250.187_941_905_7).abs() < 1e-6, "Pluto at {}", j2000);

        let jd = to_julian_day(1990, 3, 25, 19.0, 30.0);
        let lon = geocentric_longitude(Planet::Pluto, jd).unwrap();
        assert!((lon - 226.496_532_911_8).abs() < 1e-6, "Pluto at {}", lon);
    }

    #[test]
    fn test_mercury_geocentric_longitude_is_pinned() {
        let j2000 = geocentric_longitude(Planet::Mercury, J2000).unwrap();
        assert!((j2000 - 271.950_542_451_3).abs() < 1e-6, "Mercury at {}", j2000);

        let jd = to_julian_day(1990, 3, 25, 19.0, 30.0);
        let lon = geocentric_longitude(Planet::Mercury, jd).unwrap();
        assert!((lon - 11.824_588_398_3).abs() < 1e-6, "Mercury at {}", lon);
    }

    #[test]
    fn test_inclination_fold_only_affects_heliocentric_longitude() {
        // Pluto's 17° inclination separates the two forms by about a degree.
        let folded = heliocentric_longitude(Planet::Pluto, J2000);
        let in_plane = in_plane_position(Planet::Pluto, J2000).longitude;
        assert!(crate::util::wrap_signed_degrees(folded - in_plane).abs() > 0.1);
        assert_eq!(
            heliocentric_position(Planet::Pluto, J2000).radius,
            in_plane_position(Planet::Pluto, J2000).radius
        );
    }

    #[test]
    fn test_geocentric_longitudes_are_normalized() {
        for planet in Planet::ALL.iter().copied().filter(|p| *p != Planet::Earth) {
            let lon = geocentric_longitude(planet, J2000 - 5000.25).unwrap();
            assert!((0.0..360.0).contains(&lon));
        }
    }
}
