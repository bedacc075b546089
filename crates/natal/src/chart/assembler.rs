use crate::aspects::calculator::AspectCalculator;
use crate::chart::types::{BirthData, NatalChart, PlanetPosition};
use crate::ephemeris::position::{ecliptic_longitude, is_retrograde};
use crate::ephemeris::types::Body;
use crate::houses::{
    compute_ascendant, compute_midheaven, equal_house_cusps, house_for_longitude,
    local_sidereal_time, obliquity, HOUSE_COUNT,
};
use crate::western::zodiac::degrees_to_sign;

/// Cast a natal chart for a birth moment and place.
///
/// Pure and deterministic: the same `BirthData` always yields the same chart.
/// Accuracy is at the degree level, enough for sign and house placement.
pub fn calculate_natal_chart(birth: &BirthData) -> NatalChart {
    let jd = birth.julian_day();

    let obl = obliquity(jd);
    let lst = local_sidereal_time(jd, birth.longitude);
    let asc = compute_ascendant(lst, birth.latitude, obl);
    let mc = compute_midheaven(lst, obl);
    let cusps = equal_house_cusps(asc);

    log::debug!(
        "Casting chart at JD {:.5}: obliquity {:.4}, LST {:.4}, ASC {:.4}, MC {:.4}",
        jd,
        obl,
        lst,
        asc,
        mc
    );

    let positions = Body::ALL.map(|body| build_position(body, jd, &cusps));
    for p in &positions {
        log::trace!(
            "{} at {:.4} ({} {:.2}, house {}{})",
            p.body,
            p.total_degrees,
            p.sign,
            p.degrees,
            p.house,
            if p.retrograde { ", retrograde" } else { "" }
        );
    }

    let aspects = AspectCalculator::new().calculate_aspects(&positions);

    NatalChart {
        julian_day: jd,
        positions,
        ascendant: degrees_to_sign(asc),
        midheaven: degrees_to_sign(mc),
        aspects,
        house_cusps: cusps,
    }
}

fn build_position(body: Body, jd: f64, cusps: &[f64; HOUSE_COUNT]) -> PlanetPosition {
    let longitude = ecliptic_longitude(body, jd);
    let sign_pos = degrees_to_sign(longitude);
    PlanetPosition {
        body,
        sign: sign_pos.sign,
        degrees: sign_pos.degrees,
        total_degrees: sign_pos.total_degrees,
        house: house_for_longitude(sign_pos.total_degrees, cusps),
        retrograde: is_retrograde(body, jd),
    }
}
