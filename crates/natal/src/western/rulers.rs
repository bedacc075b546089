//! Sign rulers for Western astrology.
//!
//! Modern rulerships give Scorpio, Aquarius and Pisces to the outer planets;
//! traditional ones keep the seven visible bodies.

use crate::ephemeris::types::Body;
use crate::western::signs::Sign;
use crate::western::zodiac::degrees_to_sign;

/// Ruler of a sign, modern or traditional.
pub fn sign_ruler(sign: Sign, modern: bool) -> Body {
    if modern {
        sign.ruler()
    } else {
        sign.traditional_ruler()
    }
}

/// Ruler of the sign containing a longitude.
pub fn sign_ruler_from_longitude(longitude: f64, modern: bool) -> Body {
    sign_ruler(degrees_to_sign(longitude).sign, modern)
}

/// Signs a body rules, in zodiac order. Empty for bodies that rule nothing
/// under the chosen scheme.
pub fn signs_ruled_by(body: Body, modern: bool) -> Vec<Sign> {
    Sign::ALL
        .iter()
        .copied()
        .filter(|sign| sign_ruler(*sign, modern) == body)
        .collect()
}
