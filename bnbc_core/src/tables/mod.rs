//! # BNBC 2020 Code Tables
//!
//! Regulatory code tables modeled as data: pure, total lookups from a
//! discrete key (enum) to immutable constant records. Nothing in this
//! module performs I/O or fails; an unresolvable key always resolves to
//! the documented default for its table:
//!
//! | Table                      | Default on unknown key          |
//! |----------------------------|---------------------------------|
//! | Zone coefficient           | 0.20 (Dhaka)                    |
//! | R / Cd / Omega0            | 5 / 4.5 / 2.5                   |
//! | Site coefficients, S, TB-TD| SC row                          |
//! | Height limit               | 48 m                            |
//! | Period coefficients        | Concrete moment frame row       |
//! | Seismic design category    | D (most conservative)           |
//!
//! ## Tables
//!
//! - [`occupancy`] - occupancy categories and importance factors (T6.1.1, T6.2.17)
//! - [`zone`] - seismic zoning of Bangladesh towns (T6.2.14)
//! - [`site`] - site classes, Fa/Fv, soil factor, spectrum periods (T6.2.13-16)
//! - [`structure`] - building period coefficients Ct, m (T6.2.20)
//! - [`systems`] - lateral force-resisting system catalogue (T6.2.19)
//! - [`sdc`] - seismic design category assignment (T6.2.18)
//! - [`tie_bars`] - tie-bar nominal areas for confinement checks

pub mod occupancy;
pub mod sdc;
pub mod site;
pub mod structure;
pub mod systems;
pub mod tie_bars;
pub mod zone;

pub use occupancy::OccupancyCategory;
pub use sdc::{seismic_design_category, SeismicDesignCategory};
pub use site::{SiteClass, SiteCoefficients, SpectrumPeriods};
pub use structure::{PeriodCoefficients, StructureType};
pub use systems::{entry_for, HeightLimit, LateralCategory, LateralSystem, SystemEntry};
pub use tie_bars::TieBarSize;
pub use zone::{zone_number_from_coefficient, Town};
