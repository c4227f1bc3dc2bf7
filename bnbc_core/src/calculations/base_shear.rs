//! # Seismic Base Shear Calculation
//!
//! Equivalent static base shear per BNBC 2020, Part 6, Chapter 2.
//!
//! The calculation chain: approximate period from height and structure
//! type, importance factor from occupancy, R/Omega0/Cd from the lateral
//! system catalogue, site-dependent spectrum parameters, then the
//! normalized response coefficient Cs (equations 6.2.35a-d) clamped to
//! its code bounds, the design spectral acceleration
//! Sa = (2/3)(Z I / R) Cs, and finally V = Sa W.
//!
//! ## Example
//!
//! ```rust
//! use bnbc_core::calculations::base_shear::{calculate, BaseShearInput};
//!
//! let input = BaseShearInput {
//!     height_m: 30.0,
//!     weight_kn: 10_000.0,
//!     ..BaseShearInput::default()
//! };
//! let result = calculate(&input).unwrap();
//! assert!(result.base_shear_kn > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::tables::{
    entry_for, seismic_design_category, zone_number_from_coefficient, LateralCategory,
    LateralSystem, OccupancyCategory, SeismicDesignCategory, SiteClass, StructureType, Town,
};

/// Damping correction factor for 5% viscous damping
const ETA: f64 = 1.0;

/// Spectral acceleration ordinates Ss and S1 (in units of g).
///
/// BNBC maps these over the country; the engine's built-in derivation
/// (Ss = 2.5 Z, S1 = 1.0 Z) is a code-simplified approximation, *not*
/// the literal map values. Callers holding real map values should pass
/// them via [`BaseShearInput::spectral_override`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralOrdinates {
    /// Short-period spectral acceleration Ss (g)
    pub ss: f64,
    /// 1-second spectral acceleration S1 (g)
    pub s1: f64,
}

impl SpectralOrdinates {
    /// Approximate Ss and S1 from the zone coefficient.
    ///
    /// TODO: replace with a lookup of the BNBC spectral acceleration
    /// maps once digitized values are available; pending domain review.
    pub fn approximate_from_zone(zone_coefficient: f64) -> Self {
        SpectralOrdinates {
            ss: 2.5 * zone_coefficient,
            s1: 1.0 * zone_coefficient,
        }
    }
}

/// Input parameters for the base shear calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "building_id": "B-01",
///   "occupancy": "II",
///   "town": "Dhaka",
///   "site_class": "SC",
///   "category": "MomentFrame",
///   "system": "MomentSpecialSteel",
///   "structure_type": "ConcreteMoment",
///   "height_m": 30.0,
///   "weight_kn": 10000.0,
///   "spectral_override": null
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseShearInput {
    /// User label for the building (e.g. "B-01")
    pub building_id: String,

    /// Occupancy category (drives importance factor and SDC)
    pub occupancy: OccupancyCategory,

    /// Town selection (drives zone coefficient Z)
    pub town: Town,

    /// Soil site class
    pub site_class: SiteClass,

    /// Seismic force-resisting system category
    pub category: LateralCategory,

    /// Seismic force-resisting system within the category
    pub system: LateralSystem,

    /// Structure type for the approximate-period formula
    pub structure_type: StructureType,

    /// Building height hn in meters
    pub height_m: f64,

    /// Seismic weight (mass source) W in kN
    pub weight_kn: f64,

    /// Real spectral map ordinates, if available; `None` uses the
    /// built-in zone-coefficient approximation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spectral_override: Option<SpectralOrdinates>,
}

impl Default for BaseShearInput {
    fn default() -> Self {
        BaseShearInput {
            building_id: String::new(),
            occupancy: OccupancyCategory::default(),
            town: Town::default(),
            site_class: SiteClass::default(),
            category: LateralCategory::MomentFrame,
            system: LateralSystem::MomentSpecialSteel,
            structure_type: StructureType::default(),
            height_m: 0.0,
            weight_kn: 0.0,
            spectral_override: None,
        }
    }
}

impl BaseShearInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.height_m.is_finite() || self.height_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "height_m",
                self.height_m.to_string(),
                "Building height must be positive",
            ));
        }
        if !self.weight_kn.is_finite() || self.weight_kn <= 0.0 {
            return Err(CalcError::invalid_input(
                "weight_kn",
                self.weight_kn.to_string(),
                "Seismic weight must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from the base shear calculation.
///
/// Produced atomically per invocation and immutable once returned; a
/// re-calculation supersedes the previous result rather than mutating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseShearResult {
    /// Importance factor I
    pub importance_factor: f64,

    /// Seismic design category
    pub sdc: SeismicDesignCategory,

    /// Soil factor S
    pub soil_factor: f64,

    /// Spectrum corner period TB (s)
    pub tb_s: f64,
    /// Spectrum corner period TC (s)
    pub tc_s: f64,
    /// Spectrum corner period TD (s)
    pub td_s: f64,

    /// Structural height limit for this system at this SDC, as report text
    pub height_limit_display: String,

    /// Response modification factor R
    pub r: f64,
    /// Overstrength factor Omega0
    pub omega0: f64,
    /// Deflection amplification factor Cd
    pub cd: f64,

    /// Period coefficient Ct
    pub ct: f64,
    /// Period exponent m
    pub m: f64,
    /// Approximate fundamental period T = Ct hn^m (s)
    pub fundamental_period_s: f64,

    /// Zone coefficient Z
    pub zone_coefficient: f64,

    // Intermediate spectral values, kept for report traceability
    /// Short-period spectral acceleration Ss (g)
    pub ss: f64,
    /// 1-second spectral acceleration S1 (g)
    pub s1: f64,
    /// Site-adjusted SMS = Fa Ss
    pub sms: f64,
    /// Site-adjusted SM1 = Fv S1
    pub sm1: f64,
    /// Design value SDS = (2/3) SMS
    pub sds: f64,
    /// Design value SD1 = (2/3) SM1
    pub sd1: f64,

    /// Upper bound on Cs (2.5 S eta)
    pub cs_max: f64,
    /// Lower bound on Cs after the zone-3 adjustment
    pub cs_min: f64,
    /// Normalized seismic response coefficient, clamped into [cs_min, cs_max]
    pub cs: f64,

    /// Design spectral acceleration Sa = (2/3)(Z I / R) Cs (g)
    pub design_spectral_acceleration: f64,

    /// Seismic base shear V = Sa W (kN)
    pub base_shear_kn: f64,
}

/// Normalized response coefficient Cs per BNBC equations 6.2.35a-d,
/// before the code bounds are applied.
fn normalized_cs(t: f64, s: f64, tb: f64, tc: f64, td: f64) -> f64 {
    if t <= tb {
        // 6.2.35a
        s * (1.0 + (t / tb) * (2.5 * ETA - 1.0))
    } else if t <= tc {
        // 6.2.35b
        2.5 * s * ETA
    } else if t <= td {
        // 6.2.35c
        2.5 * s * ETA * (tc / t)
    } else {
        // 6.2.35d, T capped at 4 s on this branch only
        let t_limited = t.min(4.0);
        2.5 * s * ETA * (tc * td) / (t_limited * t_limited)
    }
}

/// Calculate seismic base shear and all associated design parameters.
///
/// # Arguments
///
/// * `input` - Building, site, and system parameters
///
/// # Returns
///
/// * `Ok(BaseShearResult)` - Full parameter set including V
/// * `Err(CalcError)` - If height or weight is non-positive
pub fn calculate(input: &BaseShearInput) -> CalcResult<BaseShearResult> {
    input.validate()?;

    // Step 1-2: approximate fundamental period
    let coeffs = input.structure_type.period_coefficients();
    let t = input.structure_type.approximate_period_s(input.height_m);

    // Step 3: importance factor
    let importance = input.occupancy.importance_factor();

    // Step 4: R, Cd, Omega0; mismatched pairs fall back to defaults
    let entry = entry_for(input.category, input.system);

    // Step 5: zone coefficient and spectral ordinates
    let z = input.town.zone_coefficient();
    let zone_number = zone_number_from_coefficient(z);
    let spectral = input
        .spectral_override
        .unwrap_or_else(|| SpectralOrdinates::approximate_from_zone(z));

    // Step 6: site-adjusted and design spectral values
    let site = input.site_class.site_coefficients();
    let sms = site.fa * spectral.ss;
    let sm1 = site.fv * spectral.s1;
    let sds = (2.0 / 3.0) * sms;
    let sd1 = (2.0 / 3.0) * sm1;

    // Step 7: soil factor and spectrum corner periods
    let s = input.site_class.soil_factor();
    let periods = input.site_class.spectrum_periods();

    // Step 8: normalized response coefficient
    let cs_raw = normalized_cs(t, s, periods.tb_s, periods.tc_s, periods.td_s);

    // Step 9: code bounds on Cs
    let cs_max = 2.5 * s * ETA;
    let mut cs_min = (0.044 * sds * importance).max(0.01);
    if zone_number == 3 && spectral.s1 >= 0.75 {
        cs_min = cs_min.max(0.5 * spectral.s1);
    }
    let cs = cs_raw.clamp(cs_min, cs_max);

    // Steps 10-11: design spectral acceleration and base shear
    let sa = (2.0 / 3.0) * (z * importance / entry.r) * cs;
    let base_shear_kn = sa * input.weight_kn;

    // Step 12: seismic design category and height limit
    let sdc = seismic_design_category(z, input.occupancy, input.site_class);
    let height_limit_display = entry.height_limit(sdc).display();

    Ok(BaseShearResult {
        importance_factor: importance,
        sdc,
        soil_factor: s,
        tb_s: periods.tb_s,
        tc_s: periods.tc_s,
        td_s: periods.td_s,
        height_limit_display,
        r: entry.r,
        omega0: entry.omega0,
        cd: entry.cd,
        ct: coeffs.ct,
        m: coeffs.m,
        fundamental_period_s: t,
        zone_coefficient: z,
        ss: spectral.ss,
        s1: spectral.s1,
        sms,
        sm1,
        sds,
        sd1,
        cs_max,
        cs_min,
        cs,
        design_spectral_acceleration: sa,
        base_shear_kn,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_input() -> BaseShearInput {
        // Dhaka (Z=0.20), occupancy II, SC soil, special steel moment
        // frame (R=8), concrete moment period row, 30 m, 10 000 kN
        BaseShearInput {
            building_id: "B-01".to_string(),
            occupancy: OccupancyCategory::II,
            town: Town::Dhaka,
            site_class: SiteClass::SC,
            category: LateralCategory::MomentFrame,
            system: LateralSystem::MomentSpecialSteel,
            structure_type: StructureType::ConcreteMoment,
            height_m: 30.0,
            weight_kn: 10_000.0,
            spectral_override: None,
        }
    }

    #[test]
    fn test_scenario_parameter_chain() {
        let result = calculate(&scenario_input()).unwrap();

        assert_eq!(result.importance_factor, 1.0);
        assert_eq!(result.r, 8.0);
        assert_eq!(result.omega0, 3.0);
        assert_eq!(result.cd, 5.5);
        assert_eq!(result.soil_factor, 1.15);
        assert_eq!(result.zone_coefficient, 0.20);
        assert_eq!(result.sdc, SeismicDesignCategory::C);
        assert_eq!(result.height_limit_display, "No Limit");

        // T = 0.0466 * 30^0.9, which lands on the TC < T <= TD branch
        let t = 0.0466 * 30.0_f64.powf(0.9);
        assert!((result.fundamental_period_s - t).abs() < 1e-12);
        assert!(t > result.tc_s && t <= result.td_s);

        // Cs = 2.5 S eta (TC/T) on that branch, within bounds
        let expected_cs = 2.5 * 1.15 * (0.6 / t);
        assert!((result.cs - expected_cs).abs() < 1e-9);

        // Sa = (2/3)(Z I / R) Cs, V = Sa W
        let expected_sa = (2.0 / 3.0) * (0.20 * 1.0 / 8.0) * expected_cs;
        assert!((result.design_spectral_acceleration - expected_sa).abs() < 1e-9);
        assert!((result.base_shear_kn - expected_sa * 10_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_spectral_approximation() {
        let result = calculate(&scenario_input()).unwrap();
        assert!((result.ss - 0.5).abs() < 1e-12); // 2.5 * 0.20
        assert!((result.s1 - 0.2).abs() < 1e-12); // 1.0 * 0.20
        assert!((result.sms - 1.2 * 0.5).abs() < 1e-12);
        assert!((result.sds - (2.0 / 3.0) * 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_spectral_override_replaces_approximation() {
        let mut input = scenario_input();
        input.spectral_override = Some(SpectralOrdinates { ss: 1.0, s1: 0.4 });
        let result = calculate(&input).unwrap();
        assert_eq!(result.ss, 1.0);
        assert_eq!(result.s1, 0.4);
        assert!((result.sms - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_base_shear_linear_in_weight() {
        let mut input = scenario_input();
        let v1 = calculate(&input).unwrap().base_shear_kn;

        input.weight_kn = 20_000.0;
        let v2 = calculate(&input).unwrap().base_shear_kn;

        assert!(v2 > v1);
        assert!((v2 - 2.0 * v1).abs() < 1e-6);
    }

    #[test]
    fn test_cs_always_within_bounds() {
        // Sweep heights so T crosses every spectrum branch
        for height_m in [1.0, 3.0, 8.0, 15.0, 30.0, 80.0, 200.0, 400.0] {
            for site_class in SiteClass::ALL {
                let input = BaseShearInput {
                    height_m,
                    site_class,
                    ..scenario_input()
                };
                let result = calculate(&input).unwrap();
                assert!(
                    result.cs >= result.cs_min && result.cs <= result.cs_max,
                    "Cs {} outside [{}, {}] at H={} {:?}",
                    result.cs,
                    result.cs_min,
                    result.cs_max,
                    height_m,
                    site_class
                );
            }
        }
    }

    #[test]
    fn test_short_period_branch() {
        // Very short building: T <= TB, equation 6.2.35a
        let input = BaseShearInput {
            height_m: 1.0,
            ..scenario_input()
        };
        let result = calculate(&input).unwrap();
        let t = result.fundamental_period_s;
        assert!(t <= result.tb_s);
        let expected = 1.15 * (1.0 + (t / 0.2) * 1.5);
        assert!((result.cs - expected.clamp(result.cs_min, result.cs_max)).abs() < 1e-9);
    }

    #[test]
    fn test_long_period_branch_caps_t_at_4s() {
        // Absurdly tall input to force T > 4 s; the 6.2.35d branch must
        // divide by 4^2, not T^2
        let input = BaseShearInput {
            height_m: 2_000.0,
            ..scenario_input()
        };
        let result = calculate(&input).unwrap();
        assert!(result.fundamental_period_s > 4.0);
        let uncapped: f64 = 2.5 * 1.15 * (0.6 * 2.0) / (4.0 * 4.0);
        assert!((result.cs - uncapped.clamp(result.cs_min, result.cs_max)).abs() < 1e-9);
    }

    #[test]
    fn test_mismatched_system_uses_default_factors() {
        let input = BaseShearInput {
            category: LateralCategory::BearingWall,
            system: LateralSystem::MomentSpecialSteel,
            ..scenario_input()
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.r, 5.0);
        assert_eq!(result.cd, 4.5);
        assert_eq!(result.omega0, 2.5);
        assert_eq!(result.height_limit_display, "48 m");
    }

    #[test]
    fn test_idempotence() {
        let input = scenario_input();
        let a = calculate(&input).unwrap();
        let b = calculate(&input).unwrap();
        assert_eq!(a.base_shear_kn, b.base_shear_kn);
        assert_eq!(a.cs, b.cs);
        assert_eq!(a.fundamental_period_s, b.fundamental_period_s);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut input = scenario_input();
        input.height_m = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = scenario_input();
        input.weight_kn = -10.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = scenario_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: BaseShearInput = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.height_m, input.height_m);
        assert_eq!(roundtrip.system, input.system);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: BaseShearResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.base_shear_kn, result.base_shear_kn);
    }
}
