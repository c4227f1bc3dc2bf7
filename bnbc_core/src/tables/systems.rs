//! Seismic force-resisting systems per BNBC 2020 Table 6.2.19.
//!
//! Each system entry carries the response modification factor R, the
//! overstrength factor Omega0, the deflection amplification factor Cd,
//! and the structural height limits per seismic design category.
//!
//! Lookup is by (category, system). A system requested under a category
//! it does not belong to is not an error: the documented default entry
//! (R 5, Omega0 2.5, Cd 4.5, 48 m limit) applies instead, matching the
//! defaulting rules of the source tables.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::sdc::SeismicDesignCategory;

/// Structural height limit for one seismic design category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HeightLimit {
    /// "NL" - no height limit
    NoLimit,
    /// "NP" - system not permitted in this category
    NotPermitted,
    /// Numeric limit in meters
    Meters(f64),
}

impl HeightLimit {
    /// Report wording ("No Limit", "Not Permitted", "50 m")
    pub fn display(&self) -> String {
        match self {
            HeightLimit::NoLimit => "No Limit".to_string(),
            HeightLimit::NotPermitted => "Not Permitted".to_string(),
            HeightLimit::Meters(m) => format!("{} m", m),
        }
    }
}

/// One row of BNBC Table 6.2.19
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemEntry {
    /// Table row description
    pub name: &'static str,
    /// Response modification factor R
    pub r: f64,
    /// Overstrength factor Omega0
    pub omega0: f64,
    /// Deflection amplification factor Cd
    pub cd: f64,
    /// Height limits for SDC B, C, D in that order
    pub height_limits: [HeightLimit; 3],
}

impl SystemEntry {
    /// Height limit for a given seismic design category
    pub fn height_limit(&self, sdc: SeismicDesignCategory) -> HeightLimit {
        self.height_limits[sdc.index()]
    }
}

/// Default entry used when a (category, system) pair cannot be resolved
pub const DEFAULT_ENTRY: SystemEntry = SystemEntry {
    name: "Unclassified system (default factors)",
    r: 5.0,
    omega0: 2.5,
    cd: 4.5,
    height_limits: [
        HeightLimit::Meters(48.0),
        HeightLimit::Meters(48.0),
        HeightLimit::Meters(48.0),
    ],
};

/// Category of seismic force-resisting system (Table 6.2.19 parts A-E)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LateralCategory {
    /// A. Bearing wall systems (no frame)
    BearingWall,
    /// B. Building frame systems (with bracing or shear wall)
    BuildingFrame,
    /// C. Moment resisting frame systems (no shear wall)
    #[default]
    MomentFrame,
    /// D. Dual systems with special moment frames
    DualSpecial,
    /// E. Dual systems with intermediate moment frames
    DualIntermediate,
}

impl LateralCategory {
    /// All categories for UI selection
    pub const ALL: [LateralCategory; 5] = [
        LateralCategory::BearingWall,
        LateralCategory::BuildingFrame,
        LateralCategory::MomentFrame,
        LateralCategory::DualSpecial,
        LateralCategory::DualIntermediate,
    ];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LateralCategory::BearingWall => "A. Bearing Wall Systems (no frame)",
            LateralCategory::BuildingFrame => {
                "B. Building Frame Systems (with bracing or shear wall)"
            }
            LateralCategory::MomentFrame => "C. Moment Resisting Frame Systems (no shear wall)",
            LateralCategory::DualSpecial => "D. Dual Systems: Special Moment Frames",
            LateralCategory::DualIntermediate => "E. Dual Systems: Intermediate Moment Frames",
        }
    }

    /// Systems belonging to this category, in table order
    pub fn systems(&self) -> &'static [LateralSystem] {
        &SYSTEMS_BY_CATEGORY[self]
    }
}

impl std::fmt::Display for LateralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Individual seismic force-resisting system (Table 6.2.19 rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LateralSystem {
    // A. Bearing wall systems
    BearingSpecialRcShearWall,
    BearingOrdinaryRcShearWall,
    BearingOrdinaryReinforcedMasonryWall,
    BearingOrdinaryPlainMasonryWall,
    // B. Building frame systems
    FrameSteelEccentricBraced,
    FrameSteelEccentricBracedNonMoment,
    FrameSpecialSteelConcentricBraced,
    FrameOrdinarySteelConcentricBraced,
    FrameSpecialRcShearWall,
    FrameOrdinaryRcShearWall,
    FrameOrdinaryReinforcedMasonryWall,
    FrameOrdinaryPlainMasonryWall,
    // C. Moment resisting frame systems
    MomentSpecialSteel,
    MomentIntermediateSteel,
    MomentOrdinarySteel,
    MomentSpecialRc,
    MomentIntermediateRc,
    MomentOrdinaryRc,
    // D. Dual systems, special moment frames
    DualSteelEccentricBraced,
    DualSpecialSteelConcentricBraced,
    DualSpecialRcShearWall,
    DualOrdinaryRcShearWall,
    // E. Dual systems, intermediate moment frames
    DualIntSteelConcentricBraced,
    DualIntSpecialRcShearWall,
    DualIntOrdinaryReinforcedMasonryWall,
}

impl LateralSystem {
    /// All systems across all categories, in table order
    pub const ALL: [LateralSystem; 25] = [
        LateralSystem::BearingSpecialRcShearWall,
        LateralSystem::BearingOrdinaryRcShearWall,
        LateralSystem::BearingOrdinaryReinforcedMasonryWall,
        LateralSystem::BearingOrdinaryPlainMasonryWall,
        LateralSystem::FrameSteelEccentricBraced,
        LateralSystem::FrameSteelEccentricBracedNonMoment,
        LateralSystem::FrameSpecialSteelConcentricBraced,
        LateralSystem::FrameOrdinarySteelConcentricBraced,
        LateralSystem::FrameSpecialRcShearWall,
        LateralSystem::FrameOrdinaryRcShearWall,
        LateralSystem::FrameOrdinaryReinforcedMasonryWall,
        LateralSystem::FrameOrdinaryPlainMasonryWall,
        LateralSystem::MomentSpecialSteel,
        LateralSystem::MomentIntermediateSteel,
        LateralSystem::MomentOrdinarySteel,
        LateralSystem::MomentSpecialRc,
        LateralSystem::MomentIntermediateRc,
        LateralSystem::MomentOrdinaryRc,
        LateralSystem::DualSteelEccentricBraced,
        LateralSystem::DualSpecialSteelConcentricBraced,
        LateralSystem::DualSpecialRcShearWall,
        LateralSystem::DualOrdinaryRcShearWall,
        LateralSystem::DualIntSteelConcentricBraced,
        LateralSystem::DualIntSpecialRcShearWall,
        LateralSystem::DualIntOrdinaryReinforcedMasonryWall,
    ];

    /// The category this system belongs to in Table 6.2.19
    pub fn category(&self) -> LateralCategory {
        use LateralSystem::*;
        match self {
            BearingSpecialRcShearWall
            | BearingOrdinaryRcShearWall
            | BearingOrdinaryReinforcedMasonryWall
            | BearingOrdinaryPlainMasonryWall => LateralCategory::BearingWall,
            FrameSteelEccentricBraced
            | FrameSteelEccentricBracedNonMoment
            | FrameSpecialSteelConcentricBraced
            | FrameOrdinarySteelConcentricBraced
            | FrameSpecialRcShearWall
            | FrameOrdinaryRcShearWall
            | FrameOrdinaryReinforcedMasonryWall
            | FrameOrdinaryPlainMasonryWall => LateralCategory::BuildingFrame,
            MomentSpecialSteel
            | MomentIntermediateSteel
            | MomentOrdinarySteel
            | MomentSpecialRc
            | MomentIntermediateRc
            | MomentOrdinaryRc => LateralCategory::MomentFrame,
            DualSteelEccentricBraced
            | DualSpecialSteelConcentricBraced
            | DualSpecialRcShearWall
            | DualOrdinaryRcShearWall => LateralCategory::DualSpecial,
            DualIntSteelConcentricBraced
            | DualIntSpecialRcShearWall
            | DualIntOrdinaryReinforcedMasonryWall => LateralCategory::DualIntermediate,
        }
    }

    /// The Table 6.2.19 row for this system
    pub fn entry(&self) -> &'static SystemEntry {
        use HeightLimit::{Meters, NoLimit, NotPermitted};
        use LateralSystem::*;
        match self {
            BearingSpecialRcShearWall => &SystemEntry {
                name: "Special reinforced concrete shear walls",
                r: 5.0,
                omega0: 2.5,
                cd: 5.0,
                height_limits: [NoLimit, NoLimit, Meters(50.0)],
            },
            BearingOrdinaryRcShearWall => &SystemEntry {
                name: "Ordinary reinforced concrete shear walls",
                r: 4.0,
                omega0: 2.5,
                cd: 4.0,
                height_limits: [NoLimit, NoLimit, NotPermitted],
            },
            BearingOrdinaryReinforcedMasonryWall => &SystemEntry {
                name: "Ordinary reinforced masonry shear walls",
                r: 2.0,
                omega0: 2.5,
                cd: 1.75,
                height_limits: [NoLimit, Meters(50.0), NotPermitted],
            },
            BearingOrdinaryPlainMasonryWall => &SystemEntry {
                name: "Ordinary plain masonry shear walls",
                r: 1.5,
                omega0: 2.5,
                cd: 1.25,
                height_limits: [Meters(18.0), NotPermitted, NotPermitted],
            },
            FrameSteelEccentricBraced => &SystemEntry {
                name: "Steel eccentrically braced frames, moment resisting connections at columns away from links",
                r: 8.0,
                omega0: 2.0,
                cd: 4.0,
                height_limits: [NoLimit, NoLimit, Meters(50.0)],
            },
            FrameSteelEccentricBracedNonMoment => &SystemEntry {
                name: "Steel eccentrically braced frames, non-moment-resisting connections at columns away from links",
                r: 7.0,
                omega0: 2.0,
                cd: 4.0,
                height_limits: [NoLimit, NoLimit, Meters(50.0)],
            },
            FrameSpecialSteelConcentricBraced => &SystemEntry {
                name: "Special steel concentrically braced frames",
                r: 6.0,
                omega0: 2.0,
                cd: 5.0,
                height_limits: [NoLimit, NoLimit, Meters(50.0)],
            },
            FrameOrdinarySteelConcentricBraced => &SystemEntry {
                name: "Ordinary steel concentrically braced frames",
                r: 3.25,
                omega0: 2.0,
                cd: 3.25,
                height_limits: [NoLimit, NoLimit, Meters(11.0)],
            },
            FrameSpecialRcShearWall => &SystemEntry {
                name: "Special reinforced concrete shear walls",
                r: 6.0,
                omega0: 2.5,
                cd: 5.0,
                height_limits: [NoLimit, NoLimit, Meters(50.0)],
            },
            FrameOrdinaryRcShearWall => &SystemEntry {
                name: "Ordinary reinforced concrete shear walls",
                r: 5.0,
                omega0: 2.5,
                cd: 4.25,
                height_limits: [NoLimit, NoLimit, NotPermitted],
            },
            FrameOrdinaryReinforcedMasonryWall => &SystemEntry {
                name: "Ordinary reinforced masonry shear walls",
                r: 2.0,
                omega0: 2.5,
                cd: 2.0,
                height_limits: [NoLimit, Meters(50.0), NotPermitted],
            },
            FrameOrdinaryPlainMasonryWall => &SystemEntry {
                name: "Ordinary plain masonry shear walls",
                r: 1.5,
                omega0: 2.5,
                cd: 1.25,
                height_limits: [Meters(18.0), NotPermitted, NotPermitted],
            },
            MomentSpecialSteel => &SystemEntry {
                name: "Special steel moment frames",
                r: 8.0,
                omega0: 3.0,
                cd: 5.5,
                height_limits: [NoLimit, NoLimit, NoLimit],
            },
            MomentIntermediateSteel => &SystemEntry {
                name: "Intermediate steel moment frames",
                r: 4.5,
                omega0: 3.0,
                cd: 4.0,
                height_limits: [NoLimit, NoLimit, Meters(35.0)],
            },
            MomentOrdinarySteel => &SystemEntry {
                name: "Ordinary steel moment frames",
                r: 3.5,
                omega0: 3.0,
                cd: 3.0,
                height_limits: [NoLimit, NoLimit, NotPermitted],
            },
            MomentSpecialRc => &SystemEntry {
                name: "Special reinforced concrete moment frames",
                r: 8.0,
                omega0: 3.0,
                cd: 5.5,
                height_limits: [NoLimit, NoLimit, NoLimit],
            },
            MomentIntermediateRc => &SystemEntry {
                name: "Intermediate reinforced concrete moment frames",
                r: 5.0,
                omega0: 3.0,
                cd: 4.5,
                height_limits: [NoLimit, NoLimit, NotPermitted],
            },
            MomentOrdinaryRc => &SystemEntry {
                name: "Ordinary reinforced concrete moment frames",
                r: 3.0,
                omega0: 3.0,
                cd: 2.5,
                height_limits: [NoLimit, NotPermitted, NotPermitted],
            },
            DualSteelEccentricBraced => &SystemEntry {
                name: "Steel eccentrically braced frames",
                r: 8.0,
                omega0: 2.5,
                cd: 4.0,
                height_limits: [NoLimit, NoLimit, NoLimit],
            },
            DualSpecialSteelConcentricBraced => &SystemEntry {
                name: "Special steel concentrically braced frames",
                r: 7.0,
                omega0: 2.5,
                cd: 5.5,
                height_limits: [NoLimit, NoLimit, NoLimit],
            },
            DualSpecialRcShearWall => &SystemEntry {
                name: "Special reinforced concrete shear walls",
                r: 7.0,
                omega0: 2.5,
                cd: 5.5,
                height_limits: [NoLimit, NoLimit, NoLimit],
            },
            DualOrdinaryRcShearWall => &SystemEntry {
                name: "Ordinary reinforced concrete shear walls",
                r: 6.0,
                omega0: 2.5,
                cd: 5.0,
                height_limits: [NoLimit, NoLimit, NotPermitted],
            },
            DualIntSteelConcentricBraced => &SystemEntry {
                name: "Steel concentrically braced frames",
                r: 6.0,
                omega0: 2.5,
                cd: 5.0,
                height_limits: [NoLimit, NoLimit, Meters(35.0)],
            },
            DualIntSpecialRcShearWall => &SystemEntry {
                name: "Special reinforced concrete shear walls",
                r: 6.5,
                omega0: 2.5,
                cd: 5.0,
                height_limits: [NoLimit, NoLimit, Meters(50.0)],
            },
            DualIntOrdinaryReinforcedMasonryWall => &SystemEntry {
                name: "Ordinary reinforced masonry shear walls",
                r: 3.0,
                omega0: 3.0,
                cd: 3.0,
                height_limits: [NoLimit, Meters(50.0), NotPermitted],
            },
        }
    }

    /// Display name for UI (the table row description)
    pub fn display_name(&self) -> &'static str {
        self.entry().name
    }
}

impl std::fmt::Display for LateralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Table-order listing of systems per category, built once
static SYSTEMS_BY_CATEGORY: Lazy<HashMap<LateralCategory, Vec<LateralSystem>>> = Lazy::new(|| {
    let mut map: HashMap<LateralCategory, Vec<LateralSystem>> = HashMap::new();
    for system in LateralSystem::ALL {
        map.entry(system.category()).or_default().push(system);
    }
    map
});

/// Resolve the table entry for a (category, system) pair.
///
/// Returns [`DEFAULT_ENTRY`] when the system does not belong to the
/// requested category; callers never see an error from this lookup.
pub fn entry_for(category: LateralCategory, system: LateralSystem) -> &'static SystemEntry {
    if system.category() == category {
        system.entry()
    } else {
        &DEFAULT_ENTRY
    }
}
