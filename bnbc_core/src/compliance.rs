//! # Compliance Evaluator
//!
//! Binary verdicts comparing a computed demand against its allowable
//! limit. All engines use the inclusive rule: equality counts as
//! compliant (actual <= allowable). The wording varies by calculator
//! ("PASS"/"FAIL", "OK"/"Not OK", "Ok"/"Not Ok") but the semantics do
//! not; the formatting helpers here keep the report text per calculator
//! while the comparison lives in one place.

use serde::{Deserialize, Serialize};

/// Compliance verdict for one demand-vs-limit comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl Verdict {
    /// Compare a demand against its allowable limit (inclusive)
    pub fn check(actual: f64, allowable: f64) -> Self {
        if actual <= allowable {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// Displacement-table wording
    pub fn as_pass_fail(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        }
    }

    /// Reinforcement-table wording
    pub fn as_ok(&self) -> &'static str {
        match self {
            Verdict::Pass => "OK",
            Verdict::Fail => "Not OK",
        }
    }

    /// Drift-table wording
    pub fn as_remark(&self) -> &'static str {
        match self {
            Verdict::Pass => "Ok",
            Verdict::Fail => "Not Ok",
        }
    }

    /// Combine per-axis verdicts: compliant only when both axes are
    pub fn and(self, other: Verdict) -> Verdict {
        if self.is_pass() && other.is_pass() {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_pass_fail())
    }
}

/// Human-readable remark naming the failed axes of a story row.
///
/// Returns `None` when both axes pass.
pub fn axis_failure_remark(story: &str, x: Verdict, y: Verdict) -> Option<String> {
    let mut axes: Vec<&str> = Vec::new();
    if !x.is_pass() {
        axes.push("X-Direction");
    }
    if !y.is_pass() {
        axes.push("Y-Direction");
    }
    if axes.is_empty() {
        None
    } else {
        Some(format!(
            "{}: {} exceeds allowable displacement",
            story,
            axes.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_compliant() {
        assert_eq!(Verdict::check(2.28, 2.28), Verdict::Pass);
        assert_eq!(Verdict::check(2.2800001, 2.28), Verdict::Fail);
    }

    #[test]
    fn test_wording_variants() {
        assert_eq!(Verdict::Pass.as_pass_fail(), "PASS");
        assert_eq!(Verdict::Fail.as_ok(), "Not OK");
        assert_eq!(Verdict::Fail.as_remark(), "Not Ok");
    }

    #[test]
    fn test_and_combines_axes() {
        assert_eq!(Verdict::Pass.and(Verdict::Pass), Verdict::Pass);
        assert_eq!(Verdict::Pass.and(Verdict::Fail), Verdict::Fail);
        assert_eq!(Verdict::Fail.and(Verdict::Fail), Verdict::Fail);
    }

    #[test]
    fn test_axis_failure_remark() {
        assert_eq!(axis_failure_remark("L5", Verdict::Pass, Verdict::Pass), None);
        let remark = axis_failure_remark("L5", Verdict::Fail, Verdict::Pass).unwrap();
        assert_eq!(remark, "L5: X-Direction exceeds allowable displacement");
        let both = axis_failure_remark("Roof", Verdict::Fail, Verdict::Fail).unwrap();
        assert!(both.contains("X-Direction, Y-Direction"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Verdict::Pass).unwrap();
        assert_eq!(json, "\"PASS\"");
        let roundtrip: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Verdict::Pass);
    }
}
