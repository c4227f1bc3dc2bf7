//! # Inter-Story Drift Check
//!
//! Relative displacement between adjacent stories against the code
//! drift limit.
//!
//! Stories are supplied top-down by elevation. For each story the drift
//! is the displacement difference to the story below, and the allowable
//! is `coeff x storyHeight x 12` inches, where the coefficient depends
//! on the building's fundamental period: 0.004 for T >= 0.7 s, 0.005
//! otherwise. The fundamental period comes from the base shear engine
//! (or an equivalent period calculation) and is always an explicit
//! parameter here.
//!
//! The base row has no story below it; its height and drift are 0 by
//! convention.

use serde::{Deserialize, Serialize};

use crate::compliance::Verdict;
use crate::errors::{CalcError, CalcResult};

/// Period threshold at which the drift limit tightens
const DRIFT_PERIOD_THRESHOLD_S: f64 = 0.7;

/// One story in the drift sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftStory {
    /// Story label (e.g. "Roof", "3rd")
    pub story: String,
    /// Story elevation above base (ft)
    pub elevation_ft: f64,
    /// Lateral displacement at this story (in)
    pub displacement_in: f64,
}

/// Drift analysis input: top-down story sequence plus the fundamental
/// period governing the allowable-drift coefficient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftInput {
    /// Stories ordered top-down, elevations strictly decreasing
    pub stories: Vec<DriftStory>,
    /// Fundamental period T (s)
    pub fundamental_period_s: f64,
}

/// One analyzed drift row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftRow {
    pub story: String,
    pub elevation_ft: f64,
    /// Height to the story below; 0 for the base row
    pub story_height_ft: f64,
    pub displacement_in: f64,
    /// Displacement difference to the story below; 0 for the base row
    pub drift_in: f64,
    /// Allowable drift for this story height (in)
    pub allowable_drift_in: f64,
    /// Ok / Not Ok
    pub remark: Verdict,
}

/// Aggregate statistics over the drift sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftSummary {
    pub total_stories: usize,
    pub compliant_stories: usize,
    /// Largest drift and the (first) story carrying it
    pub max_drift_in: f64,
    pub max_drift_story: String,
    /// Coefficient actually applied (0.004 or 0.005)
    pub drift_coefficient: f64,
    pub overall: Verdict,
}

/// Result of the drift analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftResult {
    pub rows: Vec<DriftRow>,
    pub summary: DriftSummary,
}

/// Allowable-drift coefficient for the given fundamental period.
pub fn drift_coefficient(fundamental_period_s: f64) -> f64 {
    if fundamental_period_s >= DRIFT_PERIOD_THRESHOLD_S {
        0.004
    } else {
        0.005
    }
}

impl DriftInput {
    /// Validate the sequence: at least two stories, finite values,
    /// strictly decreasing elevations (top-down order).
    pub fn validate(&self) -> CalcResult<()> {
        if self.stories.len() < 2 {
            return Err(CalcError::insufficient_data(
                "story drift",
                "At least two stories are required to compute a drift",
            ));
        }
        if !self.fundamental_period_s.is_finite() || self.fundamental_period_s <= 0.0 {
            return Err(CalcError::invalid_input(
                "fundamental_period_s",
                self.fundamental_period_s.to_string(),
                "Fundamental period must be positive",
            ));
        }
        for story in &self.stories {
            if story.story.trim().is_empty() {
                return Err(CalcError::missing_field("story"));
            }
            if !story.elevation_ft.is_finite() || !story.displacement_in.is_finite() {
                return Err(CalcError::invalid_input(
                    "stories",
                    story.story.clone(),
                    "Elevation and displacement must be finite",
                ));
            }
        }
        for pair in self.stories.windows(2) {
            if pair[1].elevation_ft >= pair[0].elevation_ft {
                return Err(CalcError::invalid_input(
                    "stories",
                    format!("{} -> {}", pair[0].story, pair[1].story),
                    "Stories must be ordered top-down with strictly decreasing elevations",
                ));
            }
        }
        Ok(())
    }
}

/// Run the inter-story drift check.
pub fn calculate(input: &DriftInput) -> CalcResult<DriftResult> {
    input.validate()?;

    let coefficient = drift_coefficient(input.fundamental_period_s);

    let rows: Vec<DriftRow> = input
        .stories
        .iter()
        .enumerate()
        .map(|(i, story)| {
            let below = input.stories.get(i + 1);
            let (story_height_ft, drift_in) = match below {
                Some(b) => (
                    story.elevation_ft - b.elevation_ft,
                    story.displacement_in - b.displacement_in,
                ),
                // Base row, nothing below it
                None => (0.0, 0.0),
            };
            let allowable = coefficient * story_height_ft * 12.0;
            DriftRow {
                story: story.story.clone(),
                elevation_ft: story.elevation_ft,
                story_height_ft,
                displacement_in: story.displacement_in,
                drift_in,
                allowable_drift_in: allowable,
                remark: Verdict::check(drift_in, allowable),
            }
        })
        .collect();

    let compliant = rows.iter().filter(|r| r.remark.is_pass()).count();
    let (max_drift_in, max_drift_story) = rows
        .iter()
        .fold((f64::NEG_INFINITY, ""), |(md, ms), r| {
            if r.drift_in > md {
                (r.drift_in, r.story.as_str())
            } else {
                (md, ms)
            }
        });

    let summary = DriftSummary {
        total_stories: rows.len(),
        compliant_stories: compliant,
        max_drift_in,
        max_drift_story: max_drift_story.to_string(),
        drift_coefficient: coefficient,
        overall: if compliant == rows.len() {
            Verdict::Pass
        } else {
            Verdict::Fail
        },
    };

    Ok(DriftResult { rows, summary })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(label: &str, elevation_ft: f64, displacement_in: f64) -> DriftStory {
        DriftStory {
            story: label.to_string(),
            elevation_ft,
            displacement_in,
        }
    }

    fn two_story_input() -> DriftInput {
        DriftInput {
            stories: vec![story("4th", 45.0, 1.14), story("3rd", 35.0, 0.94)],
            fundamental_period_s: 1.0,
        }
    }

    #[test]
    fn test_drift_coefficient_threshold() {
        assert_eq!(drift_coefficient(0.69), 0.005);
        assert_eq!(drift_coefficient(0.7), 0.004);
        assert_eq!(drift_coefficient(1.2), 0.004);
    }

    #[test]
    fn test_adjacent_story_drift() {
        let result = calculate(&two_story_input()).unwrap();
        let top = &result.rows[0];
        // height = 45 - 35 = 10 ft, drift = 1.14 - 0.94 = 0.20 in
        assert!((top.story_height_ft - 10.0).abs() < 1e-12);
        assert!((top.drift_in - 0.20).abs() < 1e-12);
        // T >= 0.7: allowable = 0.004 * 10 * 12 = 0.48 in
        assert!((top.allowable_drift_in - 0.48).abs() < 1e-12);
        assert_eq!(top.remark, Verdict::Pass);
    }

    #[test]
    fn test_base_row_convention() {
        let result = calculate(&two_story_input()).unwrap();
        let base = result.rows.last().unwrap();
        assert_eq!(base.story_height_ft, 0.0);
        assert_eq!(base.drift_in, 0.0);
        assert_eq!(base.allowable_drift_in, 0.0);
        // 0 <= 0 passes
        assert_eq!(base.remark, Verdict::Pass);
    }

    #[test]
    fn test_short_period_loosens_limit() {
        let mut input = two_story_input();
        input.fundamental_period_s = 0.5;
        let result = calculate(&input).unwrap();
        // 0.005 * 10 * 12 = 0.60 in
        assert!((result.rows[0].allowable_drift_in - 0.60).abs() < 1e-12);
        assert_eq!(result.summary.drift_coefficient, 0.005);
    }

    #[test]
    fn test_excessive_drift_flagged() {
        let input = DriftInput {
            stories: vec![
                story("Roof", 35.0, 1.50),
                story("3rd", 25.0, 0.73),
                story("2nd", 15.0, 0.40),
            ],
            fundamental_period_s: 1.0,
        };
        let result = calculate(&input).unwrap();
        // Roof drift = 0.77 in against 0.48 allowable
        assert_eq!(result.rows[0].remark, Verdict::Fail);
        assert_eq!(result.rows[1].remark, Verdict::Pass);
        assert_eq!(result.summary.compliant_stories, 2);
        assert_eq!(result.summary.overall, Verdict::Fail);
        assert_eq!(result.summary.max_drift_story, "Roof");
        assert!((result.summary.max_drift_in - 0.77).abs() < 1e-12);
    }

    #[test]
    fn test_single_story_rejected() {
        let input = DriftInput {
            stories: vec![story("GF", 0.0, 0.0)],
            fundamental_period_s: 1.0,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INSUFFICIENT_DATA");
    }

    #[test]
    fn test_unordered_elevations_rejected() {
        let input = DriftInput {
            stories: vec![story("3rd", 25.0, 0.73), story("Roof", 35.0, 1.14)],
            fundamental_period_s: 1.0,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        // Equal elevations are just as degenerate
        let input = DriftInput {
            stories: vec![story("A", 25.0, 0.73), story("B", 25.0, 0.60)],
            fundamental_period_s: 1.0,
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_invalid_period_rejected() {
        let mut input = two_story_input();
        input.fundamental_period_s = 0.0;
        assert!(calculate(&input).is_err());
        input.fundamental_period_s = f64::NAN;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = two_story_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: DriftInput = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.stories.len(), 2);
        assert_eq!(roundtrip.fundamental_period_s, 1.0);
    }
}
