//! Occupancy categories per BNBC 2020 Table 6.1.1 and the importance
//! factors assigned to them in Table 6.2.17.

use serde::{Deserialize, Serialize};

/// Building occupancy category per BNBC Table 6.1.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OccupancyCategory {
    /// Low hazard to human life (agricultural, minor storage)
    I,
    /// All buildings not listed in I, III, or IV
    #[default]
    II,
    /// Substantial hazard to human life (assembly, schools, jails)
    III,
    /// Essential facilities (hospitals, fire stations, shelters)
    IV,
}

impl OccupancyCategory {
    /// All occupancy variants for UI selection
    pub const ALL: [OccupancyCategory; 4] = [
        OccupancyCategory::I,
        OccupancyCategory::II,
        OccupancyCategory::III,
        OccupancyCategory::IV,
    ];

    /// Structure importance factor I per BNBC Table 6.2.17
    pub fn importance_factor(&self) -> f64 {
        match self {
            OccupancyCategory::I | OccupancyCategory::II => 1.0,
            OccupancyCategory::III => 1.25,
            OccupancyCategory::IV => 1.5,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            OccupancyCategory::I => "I (Low Hazard)",
            OccupancyCategory::II => "II (Standard)",
            OccupancyCategory::III => "III (Substantial Hazard)",
            OccupancyCategory::IV => "IV (Essential)",
        }
    }

    /// Code letter as printed in reports ("I".."IV")
    pub fn code(&self) -> &'static str {
        match self {
            OccupancyCategory::I => "I",
            OccupancyCategory::II => "II",
            OccupancyCategory::III => "III",
            OccupancyCategory::IV => "IV",
        }
    }
}

impl std::fmt::Display for OccupancyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_importance_factors() {
        assert_eq!(OccupancyCategory::I.importance_factor(), 1.0);
        assert_eq!(OccupancyCategory::II.importance_factor(), 1.0);
        assert_eq!(OccupancyCategory::III.importance_factor(), 1.25);
        assert_eq!(OccupancyCategory::IV.importance_factor(), 1.5);
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(OccupancyCategory::default(), OccupancyCategory::II);
    }
}
