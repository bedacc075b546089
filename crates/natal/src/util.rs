//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// Values already inside the range come back bit-identical, which keeps
/// `cusp[0]` equal to the Ascendant it was built from.
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    // -1e-17 + 360.0 rounds to 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Wrap a signed angular difference into [-180, 180].
pub fn wrap_signed_degrees(value: f64) -> f64 {
    let mut diff = value % 360.0;
    if diff > 180.0 {
        diff -= 360.0;
    } else if diff < -180.0 {
        diff += 360.0;
    }
    diff
}
