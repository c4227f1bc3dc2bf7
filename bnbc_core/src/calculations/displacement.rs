//! # Lateral Displacement Checks
//!
//! Per-story displacement compliance for wind and earthquake loading.
//!
//! Both analyses walk an ordered story sequence and compare actual
//! X/Y displacement against an elevation-dependent allowable:
//!
//! - wind: allowable = (elevation / 500) x 12 inches
//! - earthquake: allowable = coeff(I) x elevation x 12 inches, after
//!   amplifying the raw elastic displacement by Cd/I
//!
//! Elevations are in feet, displacements in inches. Each analysis also
//! returns a summary block (counts, governing story, failure remarks)
//! ready for a report.

use serde::{Deserialize, Serialize};

use crate::compliance::{axis_failure_remark, Verdict};
use crate::errors::{CalcError, CalcResult};

/// One measured story: identity plus raw X/Y displacement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryPoint {
    /// Story label (e.g. "ROOF", "4F", "GF")
    pub story: String,
    /// Story elevation above base (ft)
    pub elevation_ft: f64,
    /// Measurement location on the story (e.g. "Top")
    #[serde(default)]
    pub location: String,
    /// Displacement in the X direction (in)
    pub x_in: f64,
    /// Displacement in the Y direction (in)
    pub y_in: f64,
}

/// One analyzed story row: input echo plus allowable and verdicts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplacementRow {
    pub story: String,
    pub elevation_ft: f64,
    pub location: String,
    /// Displacement compared against the allowable. For wind this is
    /// the raw value; for earthquake it is the Cd/I-amplified value.
    pub x_in: f64,
    pub y_in: f64,
    /// Allowable displacement at this elevation (in)
    pub allowable_in: f64,
    pub x_status: Verdict,
    pub y_status: Verdict,
}

impl DisplacementRow {
    /// A story complies only when both axes pass.
    pub fn status(&self) -> Verdict {
        self.x_status.and(self.y_status)
    }
}

/// Aggregate statistics over an analyzed story sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplacementSummary {
    pub total_stories: usize,
    /// Stories passing on both axes
    pub compliant_stories: usize,
    pub x_pass_count: usize,
    pub y_pass_count: usize,
    /// Largest X displacement and the (first) story carrying it
    pub max_x_in: f64,
    pub max_x_story: String,
    pub max_y_in: f64,
    pub max_y_story: String,
    pub overall: Verdict,
    /// One remark per non-compliant story, naming the failing axes
    pub failure_remarks: Vec<String>,
}

/// Wind displacement analysis input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindDisplacementInput {
    pub stories: Vec<StoryPoint>,
}

/// Earthquake displacement analysis input.
///
/// Raw elastic displacements are amplified by Cd/I before the check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarthquakeDisplacementInput {
    pub stories: Vec<StoryPoint>,
    /// Deflection amplification factor Cd for the lateral system
    pub deflection_amplification_cd: f64,
    /// Importance factor I
    pub importance_factor: f64,
}

/// Result of either displacement analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplacementResult {
    pub rows: Vec<DisplacementRow>,
    pub summary: DisplacementSummary,
}

fn validate_stories(stories: &[StoryPoint], analysis: &str) -> CalcResult<()> {
    if stories.is_empty() {
        return Err(CalcError::insufficient_data(
            analysis,
            "At least one story is required",
        ));
    }
    for point in stories {
        if point.story.trim().is_empty() {
            return Err(CalcError::missing_field("story"));
        }
        if !point.elevation_ft.is_finite() || point.elevation_ft < 0.0 {
            return Err(CalcError::invalid_input(
                "elevation_ft",
                point.elevation_ft.to_string(),
                format!("Elevation for {} must be finite and non-negative", point.story),
            ));
        }
        if !point.x_in.is_finite() || !point.y_in.is_finite() {
            return Err(CalcError::invalid_input(
                "displacement",
                format!("x={}, y={}", point.x_in, point.y_in),
                format!("Displacements for {} must be finite", point.story),
            ));
        }
    }
    Ok(())
}

/// Allowable wind displacement, the H/500 serviceability limit
pub fn wind_allowable_in(elevation_ft: f64) -> f64 {
    (elevation_ft / 500.0) * 12.0
}

/// Allowable-displacement coefficient for earthquake loading.
///
/// Depends on the importance factor: 0.020 for I = 1.0, 0.015 for
/// I = 1.25, 0.010 for I = 1.5. Anything else gets the ordinary 0.020.
pub fn earthquake_allowable_coefficient(importance_factor: f64) -> f64 {
    const TOL: f64 = 1e-9;
    if (importance_factor - 1.25).abs() < TOL {
        0.015
    } else if (importance_factor - 1.5).abs() < TOL {
        0.010
    } else {
        0.020
    }
}

fn summarize(rows: &[DisplacementRow]) -> DisplacementSummary {
    let total = rows.len();
    let x_pass_count = rows.iter().filter(|r| r.x_status.is_pass()).count();
    let y_pass_count = rows.iter().filter(|r| r.y_status.is_pass()).count();
    let compliant = rows.iter().filter(|r| r.status().is_pass()).count();

    // First row carrying the extreme, matching report convention
    let (max_x_in, max_x_story) = rows
        .iter()
        .fold((f64::NEG_INFINITY, ""), |(mx, ms), r| {
            if r.x_in > mx {
                (r.x_in, r.story.as_str())
            } else {
                (mx, ms)
            }
        });
    let (max_y_in, max_y_story) = rows
        .iter()
        .fold((f64::NEG_INFINITY, ""), |(my, ms), r| {
            if r.y_in > my {
                (r.y_in, r.story.as_str())
            } else {
                (my, ms)
            }
        });

    let failure_remarks = rows
        .iter()
        .filter_map(|r| axis_failure_remark(&r.story, r.x_status, r.y_status))
        .collect();

    DisplacementSummary {
        total_stories: total,
        compliant_stories: compliant,
        x_pass_count,
        y_pass_count,
        max_x_in,
        max_x_story: max_x_story.to_string(),
        max_y_in,
        max_y_story: max_y_story.to_string(),
        overall: if compliant == total {
            Verdict::Pass
        } else {
            Verdict::Fail
        },
        failure_remarks,
    }
}

/// Run the wind displacement check over the story sequence.
pub fn calculate_wind(input: &WindDisplacementInput) -> CalcResult<DisplacementResult> {
    validate_stories(&input.stories, "wind displacement")?;

    let rows: Vec<DisplacementRow> = input
        .stories
        .iter()
        .map(|point| {
            let allowable = wind_allowable_in(point.elevation_ft);
            DisplacementRow {
                story: point.story.clone(),
                elevation_ft: point.elevation_ft,
                location: point.location.clone(),
                x_in: point.x_in,
                y_in: point.y_in,
                allowable_in: allowable,
                x_status: Verdict::check(point.x_in, allowable),
                y_status: Verdict::check(point.y_in, allowable),
            }
        })
        .collect();

    let summary = summarize(&rows);
    Ok(DisplacementResult { rows, summary })
}

/// Run the earthquake displacement check over the story sequence.
///
/// Each raw displacement is amplified by Cd/I; the row verdicts compare
/// absolute amplified values against the allowable, so a story passes
/// exactly when max(|amp_x|, |amp_y|) stays within the limit.
pub fn calculate_earthquake(
    input: &EarthquakeDisplacementInput,
) -> CalcResult<DisplacementResult> {
    validate_stories(&input.stories, "earthquake displacement")?;

    if !input.deflection_amplification_cd.is_finite() || input.deflection_amplification_cd <= 0.0 {
        return Err(CalcError::invalid_input(
            "deflection_amplification_cd",
            input.deflection_amplification_cd.to_string(),
            "Cd must be positive",
        ));
    }
    if !input.importance_factor.is_finite() || input.importance_factor <= 0.0 {
        return Err(CalcError::invalid_input(
            "importance_factor",
            input.importance_factor.to_string(),
            "Importance factor must be positive",
        ));
    }

    let amplification = input.deflection_amplification_cd / input.importance_factor;
    let coefficient = earthquake_allowable_coefficient(input.importance_factor);

    let rows: Vec<DisplacementRow> = input
        .stories
        .iter()
        .map(|point| {
            let amp_x = point.x_in * amplification;
            let amp_y = point.y_in * amplification;
            let allowable = coefficient * point.elevation_ft * 12.0;
            DisplacementRow {
                story: point.story.clone(),
                elevation_ft: point.elevation_ft,
                location: point.location.clone(),
                x_in: amp_x,
                y_in: amp_y,
                allowable_in: allowable,
                x_status: Verdict::check(amp_x.abs(), allowable),
                y_status: Verdict::check(amp_y.abs(), allowable),
            }
        })
        .collect();

    let summary = summarize(&rows);
    Ok(DisplacementResult { rows, summary })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(story: &str, elevation_ft: f64, x_in: f64, y_in: f64) -> StoryPoint {
        StoryPoint {
            story: story.to_string(),
            elevation_ft,
            location: "Top".to_string(),
            x_in,
            y_in,
        }
    }

    #[test]
    fn test_wind_allowable() {
        // 95 ft story: (95/500)*12 = 2.28 in
        assert!((wind_allowable_in(95.0) - 2.28).abs() < 1e-12);
        assert_eq!(wind_allowable_in(0.0), 0.0);
    }

    #[test]
    fn test_wind_story_passes_within_limit() {
        let input = WindDisplacementInput {
            stories: vec![point("ROOF", 95.0, 1.717, 1.422)],
        };
        let result = calculate_wind(&input).unwrap();
        let row = &result.rows[0];
        assert!((row.allowable_in - 2.28).abs() < 1e-12);
        assert_eq!(row.x_status, Verdict::Pass);
        assert_eq!(row.y_status, Verdict::Pass);
        assert_eq!(result.summary.overall, Verdict::Pass);
    }

    #[test]
    fn test_wind_boundary_is_inclusive() {
        let input = WindDisplacementInput {
            stories: vec![point("ROOF", 95.0, 2.28, 2.280000001)],
        };
        let result = calculate_wind(&input).unwrap();
        assert_eq!(result.rows[0].x_status, Verdict::Pass);
        assert_eq!(result.rows[0].y_status, Verdict::Fail);
    }

    #[test]
    fn test_wind_summary_counts_and_maxima() {
        let input = WindDisplacementInput {
            stories: vec![
                point("ROOF", 95.0, 1.717, 1.422),
                point("8F", 85.0, 1.606, 1.322),
                point("7F", 75.0, 3.000, 1.201), // X fails: 3.0 > 1.8
            ],
        };
        let result = calculate_wind(&input).unwrap();
        let summary = &result.summary;
        assert_eq!(summary.total_stories, 3);
        assert_eq!(summary.x_pass_count, 2);
        assert_eq!(summary.y_pass_count, 3);
        assert_eq!(summary.compliant_stories, 2);
        assert_eq!(summary.overall, Verdict::Fail);
        assert_eq!(summary.max_x_in, 3.0);
        assert_eq!(summary.max_x_story, "7F");
        assert_eq!(summary.max_y_in, 1.422);
        assert_eq!(summary.max_y_story, "ROOF");
        assert_eq!(summary.failure_remarks.len(), 1);
        assert!(summary.failure_remarks[0].contains("7F"));
        assert!(summary.failure_remarks[0].contains("X-Direction"));
        assert!(!summary.failure_remarks[0].contains("Y-Direction"));
    }

    #[test]
    fn test_earthquake_coefficient_by_importance() {
        assert_eq!(earthquake_allowable_coefficient(1.0), 0.020);
        assert_eq!(earthquake_allowable_coefficient(1.25), 0.015);
        assert_eq!(earthquake_allowable_coefficient(1.5), 0.010);
        // Unknown factors fall back to the ordinary limit
        assert_eq!(earthquake_allowable_coefficient(1.1), 0.020);
    }

    #[test]
    fn test_earthquake_amplification() {
        let input = EarthquakeDisplacementInput {
            stories: vec![point("ROOF", 100.0, 2.0, 1.0)],
            deflection_amplification_cd: 5.5,
            importance_factor: 1.0,
        };
        let result = calculate_earthquake(&input).unwrap();
        let row = &result.rows[0];
        // amplified = raw * Cd/I = 2.0 * 5.5 = 11.0
        assert!((row.x_in - 11.0).abs() < 1e-12);
        assert!((row.y_in - 5.5).abs() < 1e-12);
        // allowable = 0.020 * 100 * 12 = 24.0
        assert!((row.allowable_in - 24.0).abs() < 1e-12);
        assert_eq!(row.status(), Verdict::Pass);
    }

    #[test]
    fn test_earthquake_essential_building_tightens_limit() {
        let stories = vec![point("ROOF", 100.0, 2.0, 0.5)];
        let ordinary = calculate_earthquake(&EarthquakeDisplacementInput {
            stories: stories.clone(),
            deflection_amplification_cd: 5.5,
            importance_factor: 1.0,
        })
        .unwrap();
        let essential = calculate_earthquake(&EarthquakeDisplacementInput {
            stories,
            deflection_amplification_cd: 5.5,
            importance_factor: 1.5,
        })
        .unwrap();

        // I = 1.5: allowable drops to 0.010*100*12 = 12.0 while the
        // amplification shrinks to 5.5/1.5
        assert!((ordinary.rows[0].allowable_in - 24.0).abs() < 1e-12);
        assert!((essential.rows[0].allowable_in - 12.0).abs() < 1e-12);
        assert!(essential.rows[0].x_in < ordinary.rows[0].x_in);
    }

    #[test]
    fn test_earthquake_negative_displacement_uses_magnitude() {
        let input = EarthquakeDisplacementInput {
            stories: vec![point("2F", 25.0, -3.0, 0.1)],
            deflection_amplification_cd: 4.5,
            importance_factor: 1.0,
        };
        let result = calculate_earthquake(&input).unwrap();
        // |(-3.0) * 4.5| = 13.5 > 0.020*25*12 = 6.0
        assert_eq!(result.rows[0].x_status, Verdict::Fail);
        assert_eq!(result.rows[0].y_status, Verdict::Pass);
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let err = calculate_wind(&WindDisplacementInput { stories: vec![] }).unwrap_err();
        assert_eq!(err.error_code(), "INSUFFICIENT_DATA");
    }

    #[test]
    fn test_bad_story_data_rejected() {
        let input = WindDisplacementInput {
            stories: vec![point("", 10.0, 0.1, 0.1)],
        };
        assert!(calculate_wind(&input).is_err());

        let input = WindDisplacementInput {
            stories: vec![point("1F", -5.0, 0.1, 0.1)],
        };
        assert!(calculate_wind(&input).is_err());

        let input = WindDisplacementInput {
            stories: vec![point("1F", 10.0, f64::NAN, 0.1)],
        };
        assert!(calculate_wind(&input).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = EarthquakeDisplacementInput {
            stories: vec![point("ROOF", 95.0, 1.717, 1.422)],
            deflection_amplification_cd: 5.5,
            importance_factor: 1.25,
        };
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: EarthquakeDisplacementInput = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.stories[0].story, "ROOF");
        assert_eq!(roundtrip.importance_factor, 1.25);
    }
}
