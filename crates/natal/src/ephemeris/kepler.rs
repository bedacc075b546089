//! Kepler's equation solver (Newton-Raphson).

/// Iteration cap for [`solve_kepler`].
pub const MAX_ITERATIONS: usize = 50;

/// Correction size (radians) below which iteration stops.
pub const TOLERANCE: f64 = 1e-12;

/// Solve Kepler's equation `M = E - e·sin(E)` for the eccentric anomaly `E`.
///
/// Angles are in radians. Seeded at `E = M`; there is no divergence
/// handling, which is fine for the planetary eccentricities used here
/// (all below 0.25).
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut ecc_anomaly = mean_anomaly;
    for _ in 0..MAX_ITERATIONS {
        let delta = (ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly)
            / (1.0 - eccentricity * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < TOLERANCE {
            break;
        }
    }
    ecc_anomaly
}

/// True anomaly (radians) from the eccentric anomaly.
pub fn true_anomaly(ecc_anomaly: f64, eccentricity: f64) -> f64 {
    let y = (1.0 - eccentricity * eccentricity).sqrt() * ecc_anomaly.sin();
    let x = ecc_anomaly.cos() - eccentricity;
    y.atan2(x)
}
