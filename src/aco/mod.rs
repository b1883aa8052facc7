//! Ant Colony Optimization engine.
//!
//! Ants build permutations one facility at a time, sampling each next
//! facility in proportion to a shared pheromone matrix. After every batch
//! of `ant_count` evaluations the colony reinforces the edges of each
//! batch path by `K / fitness`, then evaporates the whole matrix.
//!
//! # Core Types
//!
//! - [`AcoProblem`]: Problem seam: size and path cost
//! - [`AcoConfig`]: Ant count, evaporation rate, deposit constant, seed
//! - [`Colony`]: Owns the pheromone store and ants, executes the run loop
//! - [`RunRecord`]: Best path, best fitness and per-evaluation fitness
//!
//! # Building Blocks
//!
//! - [`PheromoneStore`]: `(N + 1) × (N + 1)` matrix with an origin row
//! - [`Ant`]: Reusable path builder
//! - [`sampling`]: Prefix-sum selection with a uniform fallback
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Maniezzo & Colorni (1999), "The Ant System Applied to the Quadratic
//!   Assignment Problem"

mod ant;
mod config;
mod pheromone;
mod runner;
pub mod sampling;
mod types;

pub use ant::Ant;
pub use config::AcoConfig;
pub use pheromone::{Deposit, PheromoneStore};
pub use runner::{Colony, RunRecord};
pub use types::{AcoProblem, Node};
