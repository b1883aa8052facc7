//! Ant Colony Optimization for the Quadratic Assignment Problem.
//!
//! - **ACO engine** ([`aco`]): pheromone store, stochastic path
//!   construction, batch reinforcement and evaporation, and the
//!   evaluation-budgeted run loop that tracks the best path.
//! - **QAP** ([`qap`]): validated problem instances, the assignment cost
//!   function and a loader for the plain-text instance format.
//!
//! # Example
//!
//! ```
//! use u_aco::aco::{AcoConfig, Colony};
//! use u_aco::qap::parse_instance;
//!
//! let qap = parse_instance("2\n\n0 3\n3 0\n\n0 2\n2 0\n").unwrap();
//! let mut colony = Colony::new(&qap, AcoConfig::new(2, 0.9).with_seed(7)).unwrap();
//! let record = colony.run(10).unwrap();
//! assert_eq!(record.best_fitness, 12.0);
//! ```
//!
//! # Features
//!
//! - `parallel`: build the paths of one batch concurrently with rayon
//! - `serde`: serialize [`aco::AcoConfig`] and [`aco::RunRecord`]

pub mod aco;
pub mod error;
pub mod qap;

pub use error::ValidationError;
