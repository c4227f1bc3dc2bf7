//! Seismic zoning of Bangladesh per BNBC 2020 Table 6.2.14.
//!
//! Each town carries its seismic zone coefficient Z. The zone number
//! (1-4) is derived from Z by the thresholds in 6.2.14; it feeds the
//! seismic design category table and the zone-3 lower bound on Cs.

use serde::{Deserialize, Serialize};

/// Zone coefficient used when no town has been resolved
pub const DEFAULT_ZONE_COEFFICIENT: f64 = 0.20;

/// Towns of Bangladesh with tabulated seismic zone coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Town {
    #[default]
    Dhaka,
    Chittagong,
    Sylhet,
    Rangpur,
    Rajshahi,
    Khulna,
    Barisal,
    Mymensingh,
    Comilla,
    CoxsBazar,
    Teknaf,
}

impl Town {
    /// All towns for UI selection
    pub const ALL: [Town; 11] = [
        Town::Dhaka,
        Town::Chittagong,
        Town::Sylhet,
        Town::Rangpur,
        Town::Rajshahi,
        Town::Khulna,
        Town::Barisal,
        Town::Mymensingh,
        Town::Comilla,
        Town::CoxsBazar,
        Town::Teknaf,
    ];

    /// Seismic zone coefficient Z per BNBC Table 6.2.14
    pub fn zone_coefficient(&self) -> f64 {
        match self {
            Town::Chittagong | Town::Sylhet | Town::CoxsBazar | Town::Teknaf => 0.28,
            Town::Dhaka
            | Town::Rangpur
            | Town::Rajshahi
            | Town::Khulna
            | Town::Barisal
            | Town::Mymensingh
            | Town::Comilla => 0.20,
        }
    }

    /// Seismic zone number (1-4) derived from the zone coefficient
    pub fn zone_number(&self) -> u8 {
        zone_number_from_coefficient(self.zone_coefficient())
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Town::Dhaka => "Dhaka",
            Town::Chittagong => "Chittagong",
            Town::Sylhet => "Sylhet",
            Town::Rangpur => "Rangpur",
            Town::Rajshahi => "Rajshahi",
            Town::Khulna => "Khulna",
            Town::Barisal => "Barisal",
            Town::Mymensingh => "Mymensingh",
            Town::Comilla => "Comilla",
            Town::CoxsBazar => "Cox's Bazar",
            Town::Teknaf => "Teknaf",
        }
    }
}

impl std::fmt::Display for Town {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Zone {})", self.display_name(), self.zone_number())
    }
}

/// Map a zone coefficient to its zone number per BNBC 6.2.14 thresholds
pub fn zone_number_from_coefficient(z: f64) -> u8 {
    if z <= 0.12 {
        1
    } else if z <= 0.20 {
        2
    } else if z <= 0.28 {
        3
    } else {
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_coefficients() {
        assert_eq!(Town::Dhaka.zone_coefficient(), 0.20);
        assert_eq!(Town::Sylhet.zone_coefficient(), 0.28);
        assert_eq!(Town::Teknaf.zone_coefficient(), 0.28);
    }

    #[test]
    fn test_zone_numbers() {
        assert_eq!(Town::Dhaka.zone_number(), 2);
        assert_eq!(Town::Chittagong.zone_number(), 3);
        assert_eq!(zone_number_from_coefficient(0.12), 1);
        assert_eq!(zone_number_from_coefficient(0.36), 4);
    }

    #[test]
    fn test_default_town_matches_default_coefficient() {
        assert_eq!(Town::default().zone_coefficient(), DEFAULT_ZONE_COEFFICIENT);
    }
}
