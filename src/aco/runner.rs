//! Colony run loop.
//!
//! # Algorithm
//!
//! 1. Initialize the pheromone store with random positive weights
//! 2. Split the evaluation budget into batches of `ant_count` steps
//! 3. For each batch:
//!    a. Each participating ant builds and scores one path
//!    b. Record every fitness, update the global best
//!    c. If the batch is full: every ant deposits `K / fitness` on its
//!       path, then the whole store evaporates once
//! 4. Return the best path, its fitness and the per-step fitness sequence
//!
//! A trailing partial batch is evaluated and recorded but does not
//! reinforce or evaporate.
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant System: Optimization
//! by a Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.
//! Maniezzo, V. & Colorni, A. (1999). "The Ant System Applied to the
//! Quadratic Assignment Problem", *IEEE Trans. KDE* 11(5), 769-778.

use super::ant::Ant;
use super::config::AcoConfig;
use super::pheromone::{Deposit, PheromoneStore};
use super::types::AcoProblem;
use crate::error::ValidationError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a colony run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunRecord {
    /// Lowest fitness observed during the run.
    pub best_fitness: f64,

    /// Path that achieved `best_fitness` (facility IDs, 1-based).
    pub best_path: Vec<usize>,

    /// Fitness of every evaluation, in execution order.
    pub fitness_sequence: Vec<f64>,

    /// Number of reinforcement + evaporation cycles applied.
    pub reinforcement_cycles: usize,

    /// Construction steps that fell back to uniform sampling because the
    /// pheromone weights summed to zero.
    pub uniform_fallbacks: usize,

    /// Deposits skipped because the path fitness was not positive.
    pub skipped_deposits: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

impl RunRecord {
    fn with_capacity(evaluations: usize) -> Self {
        Self {
            best_fitness: f64::INFINITY,
            best_path: Vec::new(),
            fitness_sequence: Vec::with_capacity(evaluations),
            reinforcement_cycles: 0,
            uniform_fallbacks: 0,
            skipped_deposits: 0,
            cancelled: false,
        }
    }

    /// Number of evaluations performed.
    pub fn evaluations(&self) -> usize {
        self.fitness_sequence.len()
    }

    fn observe(&mut self, ant: &Ant) {
        let Some(fitness) = ant.fitness() else {
            return;
        };
        self.fitness_sequence.push(fitness);
        self.uniform_fallbacks += ant.fallbacks();
        if fitness < self.best_fitness || self.best_path.is_empty() {
            tracing::trace!(
                evaluation = self.fitness_sequence.len(),
                fitness,
                "new best path"
            );
            self.best_fitness = fitness;
            self.best_path.clear();
            self.best_path.extend_from_slice(ant.path());
        }
    }
}

/// An ant colony bound to one problem instance.
///
/// The colony exclusively owns the pheromone store. Ants only read it
/// while building paths and hand back [`Deposit`] requests;
/// every write goes through [`reinforce`](Colony::reinforce) and
/// [`evaporate_pheromones`](Colony::evaporate_pheromones).
///
/// # Usage
///
/// ```
/// use u_aco::aco::{AcoConfig, Colony};
/// use u_aco::qap::QapInstance;
///
/// let qap = QapInstance::new(
///     3,
///     vec![vec![0, 1, 2], vec![1, 0, 1], vec![2, 1, 0]],
///     vec![vec![0, 5, 1], vec![5, 0, 2], vec![1, 2, 0]],
/// ).unwrap();
///
/// let mut colony = Colony::new(&qap, AcoConfig::new(4, 0.9).with_seed(42)).unwrap();
/// let record = colony.run(100).unwrap();
/// assert_eq!(record.fitness_sequence.len(), 100);
/// assert_eq!(record.best_fitness, 18.0);
/// ```
#[derive(Debug)]
pub struct Colony<'p, P: AcoProblem> {
    problem: &'p P,
    config: AcoConfig,
    store: PheromoneStore,
    ants: Vec<Ant>,
}

impl<'p, P: AcoProblem> Colony<'p, P> {
    /// Creates a colony with a freshly initialized pheromone store.
    ///
    /// Fails if the configuration is invalid or the problem is empty.
    pub fn new(problem: &'p P, config: AcoConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        let n = problem.size();
        if n == 0 {
            return Err(ValidationError::EmptyInstance);
        }

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };

        let store = PheromoneStore::random(
            n,
            config.min_initial_pheromone,
            config.max_initial_pheromone,
            &mut rng,
        );
        let ants = (0..config.ant_count)
            .map(|_| Ant::new(n, rng.random()))
            .collect();

        tracing::debug!(
            facilities = n,
            ants = config.ant_count,
            evaporation_rate = config.evaporation_rate,
            deposit_constant = config.deposit_constant,
            "colony initialized"
        );

        Ok(Self {
            problem,
            config,
            store,
            ants,
        })
    }

    /// The colony configuration.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Read-only view of the pheromone store.
    pub fn pheromones(&self) -> &PheromoneStore {
        &self.store
    }

    /// Runs exactly `fitness_evaluations` construction steps.
    pub fn run(&mut self, fitness_evaluations: usize) -> Result<RunRecord, ValidationError> {
        self.run_with_cancel(fitness_evaluations, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// The flag is checked before each batch, so a cancelled run never
    /// leaves a partially built path behind. The record holds every
    /// evaluation completed before the flag was seen.
    pub fn run_with_cancel(
        &mut self,
        fitness_evaluations: usize,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunRecord, ValidationError> {
        if fitness_evaluations == 0 {
            return Err(ValidationError::ZeroEvaluations);
        }

        let ant_count = self.ants.len();
        let mut record = RunRecord::with_capacity(fitness_evaluations);
        let mut remaining = fitness_evaluations;

        while remaining > 0 {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    record.cancelled = true;
                    break;
                }
            }

            let batch = remaining.min(ant_count);
            self.construct_batch(batch);
            for ant in &self.ants[..batch] {
                record.observe(ant);
            }
            remaining -= batch;

            // Only a full batch reinforces and evaporates.
            if batch == ant_count {
                record.skipped_deposits += self.reinforce_batch();
                self.evaporate_pheromones();
                record.reinforcement_cycles += 1;
                tracing::debug!(
                    cycle = record.reinforcement_cycles,
                    best = record.best_fitness,
                    "pheromones updated"
                );
            }
        }

        tracing::info!(
            evaluations = record.evaluations(),
            best = record.best_fitness,
            cycles = record.reinforcement_cycles,
            fallbacks = record.uniform_fallbacks,
            cancelled = record.cancelled,
            "colony run finished"
        );

        Ok(record)
    }

    /// Applies one deposit request to the store.
    pub fn reinforce(&mut self, deposit: &Deposit<'_>) {
        self.store.reinforce(deposit);
    }

    /// Multiplies every pheromone entry by the evaporation rate.
    pub fn evaporate_pheromones(&mut self) {
        self.store.evaporate(self.config.evaporation_rate);
    }

    /// Builds and scores one path on each of the first `batch` ants.
    fn construct_batch(&mut self, batch: usize) {
        let problem = self.problem;
        let store = &self.store;
        let ants = &mut self.ants[..batch];

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                ants.par_iter_mut().for_each(|ant| {
                    ant.construct(problem, store);
                });
                return;
            }
        }

        for ant in ants {
            ant.construct(problem, store);
        }
    }

    /// Every ant deposits on its path. Returns the number of skipped deposits.
    fn reinforce_batch(&mut self) -> usize {
        let mut skipped = 0;
        for ant in &self.ants {
            match ant.deposit(self.config.deposit_constant) {
                Some(deposit) => self.store.reinforce(&deposit),
                None => {
                    skipped += 1;
                    tracing::debug!(fitness = ?ant.fitness(), "deposit skipped");
                }
            }
        }
        skipped
    }
}
