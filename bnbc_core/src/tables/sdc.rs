//! Seismic design category assignment per BNBC 2020 Table 6.2.18.
//!
//! The category is a function of seismic zone number, occupancy
//! category, and soil site class. The table bottoms out at D, which is
//! also the conservative fallback for anything unresolvable.

use serde::{Deserialize, Serialize};

use super::occupancy::OccupancyCategory;
use super::site::SiteClass;
use super::zone::zone_number_from_coefficient;

/// Seismic Design Category per BNBC Table 6.2.18
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeismicDesignCategory {
    B,
    C,
    D,
}

impl SeismicDesignCategory {
    /// Index into per-SDC arrays (height limits)
    pub fn index(&self) -> usize {
        match self {
            SeismicDesignCategory::B => 0,
            SeismicDesignCategory::C => 1,
            SeismicDesignCategory::D => 2,
        }
    }

    /// Letter as printed in reports
    pub fn code(&self) -> &'static str {
        match self {
            SeismicDesignCategory::B => "B",
            SeismicDesignCategory::C => "C",
            SeismicDesignCategory::D => "D",
        }
    }
}

impl std::fmt::Display for SeismicDesignCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Resolve the seismic design category for a site.
///
/// `zone_coefficient` is first reduced to a zone number (1-4) by the
/// Table 6.2.14 thresholds, then looked up against occupancy and site
/// class. Zone 3 and above is always D.
pub fn seismic_design_category(
    zone_coefficient: f64,
    occupancy: OccupancyCategory,
    site_class: SiteClass,
) -> SeismicDesignCategory {
    use SeismicDesignCategory::{B, C, D};

    let zone = zone_number_from_coefficient(zone_coefficient);
    let essential = occupancy == OccupancyCategory::IV;

    match (site_class, essential, zone) {
        (SiteClass::SB | SiteClass::SC, false, 1) => B,
        (SiteClass::SB | SiteClass::SC, false, 2) => C,
        (SiteClass::SB | SiteClass::SC, true, 1) => C,
        (SiteClass::SD, false, 1) => C,
        _ => D,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_occupancy_on_firm_soil() {
        let sdc = seismic_design_category(0.20, OccupancyCategory::II, SiteClass::SC);
        assert_eq!(sdc, SeismicDesignCategory::C);

        let sdc = seismic_design_category(0.12, OccupancyCategory::II, SiteClass::SB);
        assert_eq!(sdc, SeismicDesignCategory::B);
    }

    #[test]
    fn test_essential_facilities_are_stricter() {
        let sdc = seismic_design_category(0.12, OccupancyCategory::IV, SiteClass::SB);
        assert_eq!(sdc, SeismicDesignCategory::C);

        let sdc = seismic_design_category(0.20, OccupancyCategory::IV, SiteClass::SC);
        assert_eq!(sdc, SeismicDesignCategory::D);
    }

    #[test]
    fn test_soft_soil_is_stricter() {
        let sdc = seismic_design_category(0.12, OccupancyCategory::II, SiteClass::SD);
        assert_eq!(sdc, SeismicDesignCategory::C);

        let sdc = seismic_design_category(0.20, OccupancyCategory::II, SiteClass::SD);
        assert_eq!(sdc, SeismicDesignCategory::D);
    }

    #[test]
    fn test_high_zones_are_always_d() {
        for occupancy in OccupancyCategory::ALL {
            for site in SiteClass::ALL {
                assert_eq!(
                    seismic_design_category(0.28, occupancy, site),
                    SeismicDesignCategory::D
                );
                assert_eq!(
                    seismic_design_category(0.36, occupancy, site),
                    SeismicDesignCategory::D
                );
            }
        }
    }

    #[test]
    fn test_ordering_matches_severity() {
        assert!(SeismicDesignCategory::B < SeismicDesignCategory::C);
        assert!(SeismicDesignCategory::C < SeismicDesignCategory::D);
    }
}
