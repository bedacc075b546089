//! Calendar Sun sign from traditional date boundaries. No astronomy.

use crate::western::signs::Sign;

struct SunSignBoundary {
    sign: Sign,
    month: u32,
    day: u32,
}

const fn starts(sign: Sign, month: u32, day: u32) -> SunSignBoundary {
    SunSignBoundary { sign, month, day }
}

// First day of each sign, in calendar order.
static SUN_SIGN_DATES: [SunSignBoundary; 13] = [
    starts(Sign::Capricorn, 1, 1),
    starts(Sign::Aquarius, 1, 20),
    starts(Sign::Pisces, 2, 19),
    starts(Sign::Aries, 3, 21),
    starts(Sign::Taurus, 4, 20),
    starts(Sign::Gemini, 5, 21),
    starts(Sign::Cancer, 6, 21),
    starts(Sign::Leo, 7, 23),
    starts(Sign::Virgo, 8, 23),
    starts(Sign::Libra, 9, 23),
    starts(Sign::Scorpio, 10, 23),
    starts(Sign::Sagittarius, 11, 22),
    starts(Sign::Capricorn, 12, 22),
];

/// Sun sign for a month (1-12) and day of month.
pub fn calculate_sun_sign(month: u32, day: u32) -> Sign {
    SUN_SIGN_DATES
        .iter()
        .rev()
        .find(|b| month > b.month || (month == b.month && day >= b.day))
        .map(|b| b.sign)
        .unwrap_or(Sign::Capricorn)
}
