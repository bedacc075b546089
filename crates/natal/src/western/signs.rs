//! Zodiac signs and their static metadata.

use crate::ephemeris::types::Body;
use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn as_str(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub fn as_str(self) -> &'static str {
        match self {
            Modality::Cardinal => "cardinal",
            Modality::Fixed => "fixed",
            Modality::Mutable => "mutable",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The twelve tropical signs in zodiac order, Aries at 0°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Zero-based position in the zodiac (Aries = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Sign at a zodiac index, wrapping past Pisces.
    pub fn from_index(index: usize) -> Sign {
        Sign::ALL[index % 12]
    }

    pub fn as_str(self) -> &'static str {
        self.info().name
    }

    pub fn info(self) -> &'static SignInfo {
        &SIGN_CATALOG[self.index()]
    }

    pub fn element(self) -> Element {
        self.info().element
    }

    pub fn modality(self) -> Modality {
        self.info().modality
    }

    /// Modern ruler (Pluto, Uranus and Neptune for Scorpio, Aquarius, Pisces).
    pub fn ruler(self) -> Body {
        self.info().ruler
    }

    pub fn traditional_ruler(self) -> Body {
        self.info().traditional_ruler
    }

    /// The sign 180° away.
    pub fn opposite(self) -> Sign {
        Sign::from_index(self.index() + 6)
    }

    /// Longitude where this sign begins.
    pub fn start_degrees(self) -> f64 {
        self.index() as f64 * 30.0
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sign {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        sign_info(s).map(|info| info.sign)
    }
}

/// Catalog entry for one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignInfo {
    pub sign: Sign,
    pub name: &'static str,
    pub element: Element,
    pub modality: Modality,
    pub ruler: Body,
    pub traditional_ruler: Body,
}

const fn entry(
    sign: Sign,
    name: &'static str,
    element: Element,
    modality: Modality,
    ruler: Body,
    traditional_ruler: Body,
) -> SignInfo {
    SignInfo { sign, name, element, modality, ruler, traditional_ruler }
}

static SIGN_CATALOG: [SignInfo; 12] = [
    entry(Sign::Aries, "aries", Element::Fire, Modality::Cardinal, Body::Mars, Body::Mars),
    entry(Sign::Taurus, "taurus", Element::Earth, Modality::Fixed, Body::Venus, Body::Venus),
    entry(Sign::Gemini, "gemini", Element::Air, Modality::Mutable, Body::Mercury, Body::Mercury),
    entry(Sign::Cancer, "cancer", Element::Water, Modality::Cardinal, Body::Moon, Body::Moon),
    entry(Sign::Leo, "leo", Element::Fire, Modality::Fixed, Body::Sun, Body::Sun),
    entry(Sign::Virgo, "virgo", Element::Earth, Modality::Mutable, Body::Mercury, Body::Mercury),
    entry(Sign::Libra, "libra", Element::Air, Modality::Cardinal, Body::Venus, Body::Venus),
    entry(Sign::Scorpio, "scorpio", Element::Water, Modality::Fixed, Body::Pluto, Body::Mars),
    entry(Sign::Sagittarius, "sagittarius", Element::Fire, Modality::Mutable, Body::Jupiter, Body::Jupiter),
    entry(Sign::Capricorn, "capricorn", Element::Earth, Modality::Cardinal, Body::Saturn, Body::Saturn),
    entry(Sign::Aquarius, "aquarius", Element::Air, Modality::Fixed, Body::Uranus, Body::Saturn),
    entry(Sign::Pisces, "pisces", Element::Water, Modality::Mutable, Body::Neptune, Body::Jupiter),
];

/// Look up a sign's catalog entry by name (case-insensitive).
pub fn sign_info(name: &str) -> Result<&'static SignInfo, ChartError> {
    let lower = name.trim().to_lowercase();
    SIGN_CATALOG
        .iter()
        .find(|info| info.name == lower)
        .ok_or_else(|| ChartError::UnknownSign {
            name: name.to_string(),
            valid: SIGN_CATALOG.iter().map(|info| info.name.to_string()).collect(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_in_zodiac_order() {
        for (i, info) in SIGN_CATALOG.iter().enumerate() {
            assert_eq!(info.sign.index(), i);
            assert_eq!(Sign::ALL[i], info.sign);
        }
    }

    #[test]
    fn test_elements_and_modalities_cycle() {
        let elements = [Element::Fire, Element::Earth, Element::Air, Element::Water];
        let modalities = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];
        for sign in Sign::ALL {
            assert_eq!(sign.element(), elements[sign.index() % 4]);
            assert_eq!(sign.modality(), modalities[sign.index() % 3]);
        }
    }

    #[test]
    fn test_opposite_is_an_involution() {
        assert_eq!(Sign::Aries.opposite(), Sign::Libra);
        assert_eq!(Sign::Cancer.opposite(), Sign::Capricorn);
        for sign in Sign::ALL {
            assert_eq!(sign.opposite().opposite(), sign);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(sign_info("Scorpio").unwrap().ruler, Body::Pluto);
        assert_eq!(" LEO ".parse::<Sign>().unwrap(), Sign::Leo);
    }

    #[test]
    fn test_unknown_sign_lists_the_valid_ones() {
        match sign_info("ophiuchus") {
            Err(ChartError::UnknownSign { name, valid }) => {
                assert_eq!(name, "ophiuchus");
                assert_eq!(valid.len(), 12);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
