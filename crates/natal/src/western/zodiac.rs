use crate::util::normalize_degrees;
use crate::western::signs::Sign;
use serde::{Deserialize, Serialize};

/// A longitude expressed as sign plus degrees within the sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPosition {
    pub sign: Sign,
    /// 0 <= degrees < 30
    pub degrees: f64,
    /// 0 <= total_degrees < 360
    pub total_degrees: f64,
}

/// Map an ecliptic longitude (any real value) to its sign.
pub fn degrees_to_sign(total_degrees: f64) -> SignPosition {
    let deg = normalize_degrees(total_degrees);
    let index = ((deg / 30.0).floor() as usize).min(11);
    SignPosition {
        sign: Sign::from_index(index),
        degrees: deg - index as f64 * 30.0,
        total_degrees: deg,
    }
}

/// Shortest arc between two longitudes, in [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_is_aries() {
        let pos = degrees_to_sign(0.0);
        assert_eq!(pos.sign, Sign::Aries);
        assert_eq!(pos.degrees, 0.0);
        assert_eq!(pos.total_degrees, 0.0);
    }

    #[test]
    fn test_mid_sign_degrees() {
        for (i, sign) in Sign::ALL.iter().enumerate() {
            let pos = degrees_to_sign(30.0 * i as f64 + 15.0);
            assert_eq!(pos.sign, *sign);
            assert_abs_diff_eq!(pos.degrees, 15.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_periodic_in_360() {
        for base in [0.0, 12.5, 145.0, 359.5] {
            let a = degrees_to_sign(base);
            let b = degrees_to_sign(base + 720.0);
            let c = degrees_to_sign(base - 360.0);
            assert_eq!(a.sign, b.sign);
            assert_eq!(a.sign, c.sign);
            assert_abs_diff_eq!(a.degrees, b.degrees, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_just_below_sign_boundary() {
        let pos = degrees_to_sign(59.999_999);
        assert_eq!(pos.sign, Sign::Taurus);
        assert!(pos.degrees < 30.0);
    }

    #[test]
    fn test_negative_longitude() {
        let pos = degrees_to_sign(-15.0);
        assert_eq!(pos.sign, Sign::Pisces);
        assert_abs_diff_eq!(pos.degrees, 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_separation_folds_the_long_way_round() {
        assert_abs_diff_eq!(angular_separation(10.0, 350.0), 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(angular_separation(0.0, 180.0), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(angular_separation(100.0, 40.0), 60.0, epsilon = 1e-12);
        assert_eq!(angular_separation(45.0, 45.0), 0.0);
    }
}
