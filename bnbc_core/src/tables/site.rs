//! Soil site classes per BNBC 2020 Table 6.2.13 and the site-dependent
//! parameters keyed by them: site coefficients Fa/Fv (T6.2.15), soil
//! factor S and response-spectrum corner periods TB/TC/TD (T6.2.16).
//!
//! SC is the documented default row for any unresolved site class.

use serde::{Deserialize, Serialize};

/// Site coefficients Fa and Fv per BNBC Table 6.2.15
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteCoefficients {
    /// Short-period site coefficient
    pub fa: f64,
    /// Long-period site coefficient
    pub fv: f64,
}

/// Corner periods of the normalized design response spectrum (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumPeriods {
    /// Lower limit of the constant-acceleration branch
    pub tb_s: f64,
    /// Upper limit of the constant-acceleration branch
    pub tc_s: f64,
    /// Beginning of the constant-displacement branch
    pub td_s: f64,
}

/// Soil site class per BNBC Table 6.2.13
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SiteClass {
    /// Rock or rock-like geology
    SB,
    /// Dense sand, gravel, or stiff clay
    #[default]
    SC,
    /// Medium-dense sand or medium-stiff clay
    SD,
}

impl SiteClass {
    /// All site classes for UI selection
    pub const ALL: [SiteClass; 3] = [SiteClass::SB, SiteClass::SC, SiteClass::SD];

    /// Site coefficients Fa and Fv per BNBC Table 6.2.15
    pub fn site_coefficients(&self) -> SiteCoefficients {
        match self {
            SiteClass::SB => SiteCoefficients { fa: 1.0, fv: 1.0 },
            SiteClass::SC => SiteCoefficients { fa: 1.2, fv: 1.8 },
            SiteClass::SD => SiteCoefficients { fa: 1.6, fv: 2.4 },
        }
    }

    /// Soil factor S per BNBC Table 6.2.16
    pub fn soil_factor(&self) -> f64 {
        match self {
            SiteClass::SB | SiteClass::SC => 1.15,
            SiteClass::SD => 1.35,
        }
    }

    /// Response-spectrum corner periods TB, TC, TD per BNBC Table 6.2.16
    pub fn spectrum_periods(&self) -> SpectrumPeriods {
        match self {
            SiteClass::SB => SpectrumPeriods {
                tb_s: 0.15,
                tc_s: 0.5,
                td_s: 2.0,
            },
            SiteClass::SC => SpectrumPeriods {
                tb_s: 0.2,
                tc_s: 0.6,
                td_s: 2.0,
            },
            SiteClass::SD => SpectrumPeriods {
                tb_s: 0.2,
                tc_s: 0.8,
                td_s: 2.0,
            },
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SiteClass::SB => "SB (Rock)",
            SiteClass::SC => "SC (Dense Soil)",
            SiteClass::SD => "SD (Medium-Dense Soil)",
        }
    }

    /// Code label as printed in reports
    pub fn code(&self) -> &'static str {
        match self {
            SiteClass::SB => "SB",
            SiteClass::SC => "SC",
            SiteClass::SD => "SD",
        }
    }
}

impl std::fmt::Display for SiteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
