//! Path builder (ant).
//!
//! An [`Ant`] is long-lived: the colony creates it once and reuses its
//! scratch buffers for every evaluation. Each construction starts with an
//! explicit [`reset`](Ant::reset), so nothing from a previous path leaks
//! into the next one.

use super::pheromone::{Deposit, PheromoneStore};
use super::sampling::select_candidate;
use super::types::{AcoProblem, Node};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Stochastic path builder.
///
/// Two logical states: idle (no fitness) after [`reset`](Ant::reset), and
/// built (full path plus fitness) after [`construct`](Ant::construct).
#[derive(Debug, Clone)]
pub struct Ant {
    rng: ChaCha8Rng,
    current: Node,
    /// `allowed[i]` is true while facility `i` is still unplaced. Index 0 is
    /// the origin and never allowed.
    allowed: Vec<bool>,
    weights: Vec<f64>,
    path: Vec<usize>,
    fitness: Option<f64>,
    fallbacks: usize,
}

impl Ant {
    /// Creates an idle ant for a problem with `facilities` facilities.
    pub fn new(facilities: usize, seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            current: Node::Origin,
            allowed: vec![false; facilities + 1],
            weights: vec![0.0; facilities + 1],
            path: Vec::with_capacity(facilities),
            fitness: None,
            fallbacks: 0,
        }
    }

    /// Number of facilities this ant places.
    #[inline]
    pub fn facilities(&self) -> usize {
        self.allowed.len() - 1
    }

    /// Clears the scratch state: back at the origin, every facility
    /// available, empty path, no fitness.
    pub fn reset(&mut self) {
        self.current = Node::Origin;
        self.allowed.fill(true);
        self.allowed[0] = false;
        self.path.clear();
        self.fitness = None;
        self.fallbacks = 0;
    }

    /// Resets, then builds a full permutation of `1..=N` guided by `store`.
    ///
    /// At each of the `N` steps the candidate weights are the pheromones on
    /// `current → candidate` for unplaced candidates and zero otherwise.
    ///
    /// # Panics
    /// Panics if the store was built for a different number of facilities.
    pub fn build_path(&mut self, store: &PheromoneStore) -> &[usize] {
        assert_eq!(
            store.facilities(),
            self.facilities(),
            "pheromone store size does not match the ant"
        );
        self.reset();

        for _ in 0..self.facilities() {
            let row = store.row(self.current);
            for (candidate, weight) in self.weights.iter_mut().enumerate() {
                *weight = if self.allowed[candidate] {
                    row[candidate]
                } else {
                    0.0
                };
            }

            // At least one facility is unplaced on every step.
            let Some(choice) = select_candidate(&self.weights, &self.allowed, &mut self.rng)
            else {
                break;
            };
            if choice.is_fallback() {
                self.fallbacks += 1;
                tracing::debug!(
                    from = self.current.index(),
                    step = self.path.len(),
                    "degenerate pheromone row, sampling uniformly"
                );
            }

            let next = choice.index();
            self.path.push(next);
            self.allowed[next] = false;
            self.current = Node::Facility(next);
        }

        &self.path
    }

    /// Scores the current path and stores the result.
    pub fn score<P: AcoProblem>(&mut self, problem: &P) -> f64 {
        let fitness = problem.cost(&self.path);
        self.fitness = Some(fitness);
        fitness
    }

    /// Builds a fresh path and scores it.
    pub fn construct<P: AcoProblem>(&mut self, problem: &P, store: &PheromoneStore) -> f64 {
        self.build_path(store);
        self.score(problem)
    }

    /// The path from the last construction (empty when idle).
    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Fitness of the last constructed path, `None` when idle.
    #[inline]
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Uniform fallbacks taken during the last construction.
    #[inline]
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    /// The deposit this ant requests for its current path.
    ///
    /// The amount is `deposit_constant / fitness`. Returns `None` when the
    /// ant is idle or the fitness is not a positive finite number: a zero
    /// fitness (all-zero distances or flows) deposits nothing.
    pub fn deposit(&self, deposit_constant: f64) -> Option<Deposit<'_>> {
        let fitness = self.fitness?;
        if fitness <= 0.0 || !fitness.is_finite() {
            return None;
        }
        Some(Deposit {
            path: &self.path,
            amount: deposit_constant / fitness,
        })
    }
}
