//! # Structural Calculations
//!
//! This module contains all structural calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Results carry every intermediate quantity a report needs; nothing is
//! stashed in globals between calls.
//!
//! ## Available Calculations
//!
//! - [`base_shear`] - Seismic base shear (equivalent static force method)
//! - [`reinforcement`] - Column transverse reinforcement adequacy
//! - [`displacement`] - Wind / earthquake story displacement checks
//! - [`drift`] - Inter-story drift check

pub mod base_shear;
pub mod displacement;
pub mod drift;
pub mod reinforcement;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use base_shear::{BaseShearInput, BaseShearResult, SpectralOrdinates};
pub use displacement::{
    DisplacementResult, DisplacementRow, DisplacementSummary, EarthquakeDisplacementInput,
    StoryPoint, WindDisplacementInput,
};
pub use drift::{DriftInput, DriftResult, DriftRow, DriftStory, DriftSummary};
pub use reinforcement::{ProvidedTies, ReinforcementInput, ReinforcementResult};

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Seismic base shear calculation
    BaseShear(BaseShearInput),
    /// Transverse reinforcement check
    Reinforcement(ReinforcementInput),
    /// Wind displacement analysis
    WindDisplacement(WindDisplacementInput),
    /// Earthquake displacement analysis
    EarthquakeDisplacement(EarthquakeDisplacementInput),
    /// Inter-story drift analysis
    StoryDrift(DriftInput),
}

impl CalculationItem {
    /// Get the user-facing label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::BaseShear(b) => &b.building_id,
            CalculationItem::Reinforcement(r) => &r.label,
            CalculationItem::WindDisplacement(_) => "Wind Displacement",
            CalculationItem::EarthquakeDisplacement(_) => "Earthquake Displacement",
            CalculationItem::StoryDrift(_) => "Story Drift",
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::BaseShear(_) => "BaseShear",
            CalculationItem::Reinforcement(_) => "Reinforcement",
            CalculationItem::WindDisplacement(_) => "WindDisplacement",
            CalculationItem::EarthquakeDisplacement(_) => "EarthquakeDisplacement",
            CalculationItem::StoryDrift(_) => "StoryDrift",
        }
    }
}
