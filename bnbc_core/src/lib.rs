//! # bnbc_core - BNBC 2020 Lateral Design Calculation Engine
//!
//! `bnbc_core` implements the lateral-design calculators of StrucVision:
//! seismic base shear by the equivalent static force method, column
//! transverse reinforcement adequacy, and wind / earthquake story
//! displacement and inter-story drift checks, all per BNBC 2020.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Forgiving Tables**: Unresolvable code-table lookups fall back to
//!   documented defaults instead of failing the calculation
//!
//! ## Quick Start
//!
//! ```rust
//! use bnbc_core::calculations::base_shear::{self, BaseShearInput};
//!
//! let input = BaseShearInput {
//!     height_m: 30.0,
//!     weight_kn: 50_000.0,
//!     ..BaseShearInput::default()
//! };
//! let result = base_shear::calculate(&input).unwrap();
//! assert!(result.base_shear_kn > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Base shear, reinforcement, displacement, drift
//! - [`tables`] - BNBC 2020 code tables (zones, sites, systems, ...)
//! - [`compliance`] - Demand-vs-limit verdicts and remarks
//! - [`preview`] - Cancellable live-preview refresh timer
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod compliance;
pub mod errors;
pub mod preview;
pub mod tables;

// Re-export commonly used types at crate root for convenience
pub use calculations::CalculationItem;
pub use compliance::Verdict;
pub use errors::{CalcError, CalcResult};
