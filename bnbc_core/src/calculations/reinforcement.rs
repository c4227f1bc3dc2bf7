//! # Transverse Reinforcement Check
//!
//! Confinement steel requirements for rectangular column cores.
//!
//! The required tie area per direction is the governing (larger) of the
//! two code terms:
//!
//! ```text
//! Ash1 = 0.3 s0 hc [(Ag/Ach) - 1] (f'c / fy)
//! Ash2 = 0.09 s0 hc (f'c / fy)
//! ```
//!
//! When tie bar size and leg counts are supplied, the provided steel
//! (bar area x legs) is compared against the requirement per direction
//! with an OK / Not OK status.

use serde::{Deserialize, Serialize};

use crate::compliance::Verdict;
use crate::errors::{CalcError, CalcResult};
use crate::tables::TieBarSize;

/// Tolerance under which the two core dimensions count as equal
const SYMMETRY_TOL: f64 = 1e-6;

/// Provided tie configuration for the required-vs-provided comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProvidedTies {
    /// Tie bar size
    pub bar: TieBarSize,
    /// Number of tie legs crossing direction 1
    pub legs_1: u32,
    /// Number of tie legs crossing direction 2
    pub legs_2: u32,
}

/// Input parameters for the transverse reinforcement check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "C-1",
///   "c1_in": 20.0,
///   "c2_in": 20.0,
///   "clear_cover_in": 1.5,
///   "fc_ksi": 4.0,
///   "fy_ksi": 60.0,
///   "tie_spacing_in": 4.0,
///   "provided": { "bar": "No3", "legs_1": 5, "legs_2": 5 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReinforcementInput {
    /// User label for this column (e.g. "C-1")
    pub label: String,

    /// Column dimension in direction 1 (in)
    pub c1_in: f64,

    /// Column dimension in direction 2 (in)
    pub c2_in: f64,

    /// Clear cover to the tie (in)
    pub clear_cover_in: f64,

    /// Concrete compressive strength f'c (ksi)
    pub fc_ksi: f64,

    /// Tie steel yield strength fy (ksi)
    pub fy_ksi: f64,

    /// Tie spacing s0 (in)
    pub tie_spacing_in: f64,

    /// Provided tie configuration, if a comparison is wanted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provided: Option<ProvidedTies>,
}

impl ReinforcementInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("c1_in", self.c1_in),
            ("c2_in", self.c2_in),
            ("fc_ksi", self.fc_ksi),
            ("fy_ksi", self.fy_ksi),
            ("tie_spacing_in", self.tie_spacing_in),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be positive",
                ));
            }
        }
        if !self.clear_cover_in.is_finite() || self.clear_cover_in < 0.0 {
            return Err(CalcError::invalid_input(
                "clear_cover_in",
                self.clear_cover_in.to_string(),
                "Clear cover cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Required and provided confinement steel for one direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionCheck {
    /// Confined core dimension hc for this direction (in)
    pub hc_in: f64,

    /// First code term (area-ratio term) (in²)
    pub term_area_ratio_in2: f64,

    /// Second code term (minimum-confinement term) (in²)
    pub term_minimum_in2: f64,

    /// Governing required tie area, the larger of the two terms (in²)
    pub ash_required_in2: f64,

    /// Provided tie area, if a tie configuration was supplied (in²)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ash_provided_in2: Option<f64>,

    /// OK / Not OK verdict for provided vs required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Verdict>,
}

/// Results from the transverse reinforcement check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReinforcementResult {
    /// Gross section area Ag = c1 c2 (in²)
    pub ag_in2: f64,

    /// Confined core area Ach = hc1 hc2 (in²)
    pub ach_in2: f64,

    /// Check for direction 1 (core dimension hc1)
    pub direction_1: DirectionCheck,

    /// Check for direction 2 (core dimension hc2)
    pub direction_2: DirectionCheck,

    /// True when hc1 and hc2 coincide, so the direction 2 report may
    /// simply state "same as long direction"
    pub symmetric: bool,
}

impl ReinforcementResult {
    /// Overall verdict: pass only if every evaluated direction passes.
    ///
    /// Returns `None` when no provided-steel comparison was requested.
    pub fn overall(&self) -> Option<Verdict> {
        match (self.direction_1.status, self.direction_2.status) {
            (Some(a), Some(b)) => Some(a.and(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }
}

fn direction_check(
    hc_in: f64,
    ag: f64,
    ach: f64,
    s0: f64,
    fc: f64,
    fy: f64,
    provided: Option<(TieBarSize, u32)>,
) -> DirectionCheck {
    let strength_ratio = fc / fy;
    let term_area_ratio = 0.3 * s0 * hc_in * ((ag / ach) - 1.0) * strength_ratio;
    let term_minimum = 0.09 * s0 * hc_in * strength_ratio;
    let required = term_area_ratio.max(term_minimum);

    let (ash_provided_in2, status) = match provided {
        Some((bar, legs)) => {
            let area = bar.area_in2() * f64::from(legs);
            (Some(area), Some(Verdict::check(required, area)))
        }
        None => (None, None),
    };

    DirectionCheck {
        hc_in,
        term_area_ratio_in2: term_area_ratio,
        term_minimum_in2: term_minimum,
        ash_required_in2: required,
        ash_provided_in2,
        status,
    }
}

/// Calculate confinement steel requirements for both column directions.
///
/// # Arguments
///
/// * `input` - Column geometry, material strengths, tie layout
///
/// # Returns
///
/// * `Ok(ReinforcementResult)` - Per-direction requirements and statuses
/// * `Err(CalcError)` - Invalid input, or a cover so large the confined
///   core area Ach degenerates to zero or below
pub fn calculate(input: &ReinforcementInput) -> CalcResult<ReinforcementResult> {
    input.validate()?;

    let hc1 = input.c1_in - 2.0 * input.clear_cover_in;
    let hc2 = input.c2_in - 2.0 * input.clear_cover_in;
    let ag = input.c1_in * input.c2_in;
    let ach = hc1 * hc2;

    // The Ag/Ach ratio is undefined for a degenerate core; surface it
    // instead of letting NaN/Infinity through
    if hc1 <= 0.0 || hc2 <= 0.0 || ach <= 0.0 {
        return Err(CalcError::degenerate_geometry(
            "Ach",
            format!(
                "confined core {:.2} x {:.2} in collapses; check cover against column size",
                hc1, hc2
            ),
        ));
    }

    let symmetric = (hc1 - hc2).abs() < SYMMETRY_TOL;

    let direction_1 = direction_check(
        hc1,
        ag,
        ach,
        input.tie_spacing_in,
        input.fc_ksi,
        input.fy_ksi,
        input.provided.map(|p| (p.bar, p.legs_1)),
    );

    // hc1 == hc2 makes the second direction identical; reuse instead of
    // recomputing (same formula either way)
    let direction_2 = if symmetric && same_leg_count(&input.provided) {
        direction_1.clone()
    } else {
        direction_check(
            hc2,
            ag,
            ach,
            input.tie_spacing_in,
            input.fc_ksi,
            input.fy_ksi,
            input.provided.map(|p| (p.bar, p.legs_2)),
        )
    };

    Ok(ReinforcementResult {
        ag_in2: ag,
        ach_in2: ach,
        direction_1,
        direction_2,
        symmetric,
    })
}

fn same_leg_count(provided: &Option<ProvidedTies>) -> bool {
    match provided {
        Some(p) => p.legs_1 == p.legs_2,
        None => true,
    }
}
