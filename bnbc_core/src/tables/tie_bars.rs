//! Tie-bar sizes and nominal cross-sectional areas for confinement
//! reinforcement. Areas are per ASTM standard bar dimensions (in²).

use serde::{Deserialize, Serialize};

/// Standard tie bar size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TieBarSize {
    /// #3 bar (3/8 in diameter)
    #[default]
    No3,
    /// #4 bar (1/2 in diameter)
    No4,
    /// #5 bar (5/8 in diameter)
    No5,
    /// #6 bar (3/4 in diameter)
    No6,
}

impl TieBarSize {
    /// All tie bar sizes for UI selection
    pub const ALL: [TieBarSize; 4] = [
        TieBarSize::No3,
        TieBarSize::No4,
        TieBarSize::No5,
        TieBarSize::No6,
    ];

    /// Nominal cross-sectional area of one bar (in²)
    pub fn area_in2(&self) -> f64 {
        match self {
            TieBarSize::No3 => 0.11,
            TieBarSize::No4 => 0.20,
            TieBarSize::No5 => 0.31,
            TieBarSize::No6 => 0.44,
        }
    }

    /// Nominal diameter (in)
    pub fn diameter_in(&self) -> f64 {
        match self {
            TieBarSize::No3 => 0.375,
            TieBarSize::No4 => 0.500,
            TieBarSize::No5 => 0.625,
            TieBarSize::No6 => 0.750,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            TieBarSize::No3 => "#3 (3/8\")",
            TieBarSize::No4 => "#4 (1/2\")",
            TieBarSize::No5 => "#5 (5/8\")",
            TieBarSize::No6 => "#6 (3/4\")",
        }
    }
}

impl std::fmt::Display for TieBarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
