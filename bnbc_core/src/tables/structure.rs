//! Building period coefficients per BNBC 2020 Table 6.2.20.
//!
//! The approximate fundamental period is T = Ct * H^m where H is the
//! building height in meters. Ct and m depend on the structure type;
//! the concrete moment frame row is the documented default.

use serde::{Deserialize, Serialize};

/// Coefficients for the approximate-period formula T = Ct * H^m
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodCoefficients {
    pub ct: f64,
    pub m: f64,
}

/// Structure type for period estimation per BNBC Table 6.2.20
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StructureType {
    /// Concrete moment-resisting frames
    #[default]
    ConcreteMoment,
    /// Steel moment-resisting frames
    SteelMoment,
    /// Eccentrically braced steel frames
    EccentricallyBraced,
    /// All other structural systems
    AllOther,
}

impl StructureType {
    /// All structure types for UI selection
    pub const ALL: [StructureType; 4] = [
        StructureType::ConcreteMoment,
        StructureType::SteelMoment,
        StructureType::EccentricallyBraced,
        StructureType::AllOther,
    ];

    /// Period coefficients Ct and m per BNBC Table 6.2.20
    pub fn period_coefficients(&self) -> PeriodCoefficients {
        match self {
            StructureType::ConcreteMoment => PeriodCoefficients { ct: 0.0466, m: 0.9 },
            StructureType::SteelMoment => PeriodCoefficients { ct: 0.0724, m: 0.8 },
            StructureType::EccentricallyBraced => PeriodCoefficients { ct: 0.0731, m: 0.75 },
            StructureType::AllOther => PeriodCoefficients { ct: 0.0488, m: 0.75 },
        }
    }

    /// Approximate fundamental period T = Ct * H^m (seconds, H in meters)
    pub fn approximate_period_s(&self, height_m: f64) -> f64 {
        let PeriodCoefficients { ct, m } = self.period_coefficients();
        ct * height_m.powf(m)
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            StructureType::ConcreteMoment => "Concrete Moment Frame",
            StructureType::SteelMoment => "Steel Moment Frame",
            StructureType::EccentricallyBraced => "Eccentrically Braced Frame",
            StructureType::AllOther => "All Other Systems",
        }
    }
}

impl std::fmt::Display for StructureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
