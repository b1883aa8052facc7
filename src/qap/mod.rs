//! Quadratic Assignment Problem.
//!
//! Assign `N` facilities to `N` locations minimizing
//! `Σ_i Σ_j D[i][j] · F[π(i)][π(j)]`, where `D` holds location distances,
//! `F` facility flows and `π(i)` is the facility placed at location `i`.
//!
//! [`QapInstance`] plugs into the colony through [`AcoProblem`](crate::aco::AcoProblem).
//! The [`loader`] reads instances from their text form.
//!
//! # References
//!
//! - Koopmans & Beckmann (1957), "Assignment Problems and the Location of
//!   Economic Activities"

mod instance;
pub mod loader;

pub use instance::QapInstance;
pub use loader::{load_instance, parse_instance, LoadError};
