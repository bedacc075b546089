//! Closed-form Sun and Moon longitude series (Meeus, Astronomical
//! Algorithms, ch. 25 and 47). Coefficients must stay verbatim.

use crate::ephemeris::time::julian_centuries;
use crate::util::normalize_degrees;

/// Apparent geocentric ecliptic longitude of the Sun in degrees (0-360).
pub fn sun_longitude(jd: f64) -> f64 {
    let t = julian_centuries(jd);

    let mean_longitude = normalize_degrees(280.46646 + 36000.76983 * t + 0.0003032 * t * t);
    let mean_anomaly = normalize_degrees(357.52911 + 35999.05029 * t - 0.0001537 * t * t);
    let m = mean_anomaly.to_radians();

    let equation_of_center = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_longitude = normalize_degrees(mean_longitude + equation_of_center);

    // Nutation and aberration
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_degrees(true_longitude - 0.00569 - 0.00478 * omega.sin())
}

/// One periodic term: multiples of (D, M, M', F) and amplitude in 1e-6°.
struct PeriodicTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    amplitude: f64,
}

const fn term(d: i8, m: i8, mp: i8, f: i8, amplitude: f64) -> PeriodicTerm {
    PeriodicTerm { d, m, mp, f, amplitude }
}

// Principal longitude terms of Meeus table 47.A.
static MOON_LONGITUDE_TERMS: [PeriodicTerm; 24] = [
    term(0, 0, 1, 0, 6_288_774.0),
    term(2, 0, -1, 0, 1_274_027.0),
    term(2, 0, 0, 0, 658_314.0),
    term(0, 0, 2, 0, 213_618.0),
    term(0, 1, 0, 0, -185_116.0),
    term(0, 0, 0, 2, -114_332.0),
    term(2, 0, -2, 0, 58_793.0),
    term(2, -1, -1, 0, 57_066.0),
    term(2, 0, 1, 0, 53_322.0),
    term(2, -1, 0, 0, 45_758.0),
    term(0, 1, -1, 0, -40_923.0),
    term(1, 0, 0, 0, -34_720.0),
    term(0, 1, 1, 0, -30_383.0),
    term(2, 0, 0, -2, 15_327.0),
    term(0, 0, 1, 2, -12_528.0),
    term(0, 0, 1, -2, 10_980.0),
    term(4, 0, -1, 0, 10_675.0),
    term(0, 0, 3, 0, 10_034.0),
    term(4, 0, -2, 0, 8_548.0),
    term(2, 1, -1, 0, -7_888.0),
    term(2, 1, 0, 0, -6_766.0),
    term(1, 0, -1, 0, -5_163.0),
    term(1, 1, 0, 0, 4_987.0),
    term(2, -1, 1, 0, 4_036.0),
];

/// Geocentric ecliptic longitude of the Moon in degrees (0-360).
///
/// Longitude only; latitude and distance series are not modelled.
pub fn moon_longitude(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean_longitude = normalize_degrees(
        218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0 - t4 / 65194000.0,
    );
    let elongation = normalize_degrees(
        297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0 - t4 / 113065000.0,
    );
    let sun_anomaly =
        normalize_degrees(357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0);
    let moon_anomaly = normalize_degrees(
        134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0 - t4 / 14712000.0,
    );
    let latitude_arg = normalize_degrees(
        93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0 + t4 / 863310000.0,
    );

    let d = elongation.to_radians();
    let m = sun_anomaly.to_radians();
    let mp = moon_anomaly.to_radians();
    let f = latitude_arg.to_radians();

    let sum: f64 = MOON_LONGITUDE_TERMS
        .iter()
        .map(|term| {
            let arg = term.d as f64 * d + term.m as f64 * m + term.mp as f64 * mp + term.f as f64 * f;
            term.amplitude * arg.sin()
        })
        .sum();

    normalize_degrees(mean_longitude + sum / 1_000_000.0)
}
