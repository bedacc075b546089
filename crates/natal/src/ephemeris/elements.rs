//! Approximate Keplerian elements (JPL, Standish 1992) referred to J2000.0.
//!
//! Each element is an epoch value plus a linear rate per Julian century.

use crate::ephemeris::types::Planet;
use crate::error::ChartError;
use crate::util::normalize_degrees;

/// Secular orbital elements for one planet. Angles in degrees, axis in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub mean_longitude: f64,
    pub mean_longitude_rate: f64,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub eccentricity_rate: f64,
    pub inclination: f64,
    pub inclination_rate: f64,
    /// Longitude of the ascending node (Ω)
    pub ascending_node: f64,
    pub ascending_node_rate: f64,
    /// Longitude of perihelion (ϖ)
    pub perihelion: f64,
    pub perihelion_rate: f64,
}

/// Elements evaluated at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropagatedElements {
    pub mean_longitude: f64,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub ascending_node: f64,
    pub perihelion: f64,
}

impl PropagatedElements {
    /// Mean anomaly in degrees, 0-360.
    pub fn mean_anomaly(&self) -> f64 {
        normalize_degrees(self.mean_longitude - self.perihelion)
    }
}

// Indexed by `Planet::index`.
static ORBITAL_ELEMENTS: [OrbitalElements; 9] = [
    // Mercury
    OrbitalElements {
        mean_longitude: 252.250_323_50,
        mean_longitude_rate: 149_472.674_111_75,
        semi_major_axis: 0.387_099_27,
        eccentricity: 0.205_635_93,
        eccentricity_rate: 0.000_019_06,
        inclination: 7.004_979_02,
        inclination_rate: -0.005_947_49,
        ascending_node: 48.330_765_93,
        ascending_node_rate: -0.125_340_81,
        perihelion: 77.457_796_28,
        perihelion_rate: 0.160_476_89,
    },
    // Venus
    OrbitalElements {
        mean_longitude: 181.979_099_50,
        mean_longitude_rate: 58_517.815_387_29,
        semi_major_axis: 0.723_335_66,
        eccentricity: 0.006_776_72,
        eccentricity_rate: -0.000_041_07,
        inclination: 3.394_676_05,
        inclination_rate: -0.000_788_90,
        ascending_node: 76.679_842_55,
        ascending_node_rate: -0.277_694_18,
        perihelion: 131.602_467_18,
        perihelion_rate: 0.002_683_29,
    },
    // Earth (Earth-Moon barycentre)
    OrbitalElements {
        mean_longitude: 100.464_571_66,
        mean_longitude_rate: 35_999.372_449_81,
        semi_major_axis: 1.000_002_61,
        eccentricity: 0.016_711_23,
        eccentricity_rate: -0.000_043_92,
        inclination: 0.000_015_31,
        inclination_rate: -0.012_946_68,
        ascending_node: 0.0,
        ascending_node_rate: 0.0,
        perihelion: 102.937_681_93,
        perihelion_rate: 0.323_273_64,
    },
    // Mars
    OrbitalElements {
        mean_longitude: 355.446_562_99,
        mean_longitude_rate: 19_140.302_684_99,
        semi_major_axis: 1.523_710_34,
        eccentricity: 0.093_394_10,
        eccentricity_rate: 0.000_078_82,
        inclination: 1.849_691_42,
        inclination_rate: -0.008_131_31,
        ascending_node: 49.559_538_91,
        ascending_node_rate: -0.292_573_43,
        perihelion: 336.056_370_41,
        perihelion_rate: 0.444_410_88,
    },
    // Jupiter
    OrbitalElements {
        mean_longitude: 34.396_440_51,
        mean_longitude_rate: 3_034.746_127_75,
        semi_major_axis: 5.202_887_00,
        eccentricity: 0.048_386_24,
        eccentricity_rate: -0.000_132_53,
        inclination: 1.304_396_95,
        inclination_rate: -0.001_837_14,
        ascending_node: 100.473_909_09,
        ascending_node_rate: 0.204_691_06,
        perihelion: 14.728_479_83,
        perihelion_rate: 0.212_526_68,
    },
    // Saturn
    OrbitalElements {
        mean_longitude: 49.954_244_23,
        mean_longitude_rate: 1_222.493_622_01,
        semi_major_axis: 9.536_675_94,
        eccentricity: 0.053_861_79,
        eccentricity_rate: -0.000_509_91,
        inclination: 2.485_991_87,
        inclination_rate: 0.001_936_09,
        ascending_node: 113.662_424_48,
        ascending_node_rate: -0.288_677_94,
        perihelion: 92.598_878_31,
        perihelion_rate: -0.418_972_16,
    },
    // Uranus
    OrbitalElements {
        mean_longitude: 313.238_104_51,
        mean_longitude_rate: 428.482_027_85,
        semi_major_axis: 19.189_164_64,
        eccentricity: 0.047_257_44,
        eccentricity_rate: -0.000_043_97,
        inclination: 0.772_637_83,
        inclination_rate: -0.002_429_39,
        ascending_node: 74.016_925_03,
        ascending_node_rate: 0.042_405_89,
        perihelion: 170.954_276_30,
        perihelion_rate: 0.408_052_81,
    },
    // Neptune
    OrbitalElements {
        mean_longitude: 304.879_970_31,
        mean_longitude_rate: 218.459_453_25,
        semi_major_axis: 30.069_922_76,
        eccentricity: 0.008_590_48,
        eccentricity_rate: 0.000_051_05,
        inclination: 1.770_043_47,
        inclination_rate: 0.000_353_72,
        ascending_node: 131.784_225_74,
        ascending_node_rate: -0.012_996_30,
        perihelion: 44.964_762_27,
        perihelion_rate: -0.322_414_64,
    },
    // Pluto
    OrbitalElements {
        mean_longitude: 238.929_038_33,
        mean_longitude_rate: 145.207_805_15,
        semi_major_axis: 39.482_116_75,
        eccentricity: 0.248_827_30,
        eccentricity_rate: 0.000_051_70,
        inclination: 17.140_012_06,
        inclination_rate: 0.000_048_18,
        ascending_node: 110.303_936_84,
        ascending_node_rate: -0.011_834_82,
        perihelion: 224.068_916_29,
        perihelion_rate: -0.040_629_42,
    },
];

impl OrbitalElements {
    /// Elements for a planet.
    pub fn of(planet: Planet) -> &'static OrbitalElements {
        &ORBITAL_ELEMENTS[planet.index()]
    }

    /// Elements for a planet given by name.
    pub fn lookup(name: &str) -> Result<&'static OrbitalElements, ChartError> {
        let planet: Planet = name.parse()?;
        Ok(Self::of(planet))
    }

    /// Evaluate every element `t` Julian centuries after J2000.0.
    pub fn at(&self, t: f64) -> PropagatedElements {
        PropagatedElements {
            mean_longitude: normalize_degrees(self.mean_longitude + self.mean_longitude_rate * t),
            semi_major_axis: self.semi_major_axis,
            eccentricity: self.eccentricity + self.eccentricity_rate * t,
            inclination: self.inclination + self.inclination_rate * t,
            ascending_node: normalize_degrees(self.ascending_node + self.ascending_node_rate * t),
            perihelion: normalize_degrees(self.perihelion + self.perihelion_rate * t),
        }
    }
}
