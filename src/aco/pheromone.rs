//! Pheromone matrix and deposit requests.

use super::types::Node;
use rand::Rng;

/// Square pheromone matrix over the origin node and `N` facilities.
///
/// Row `from` holds the desirability of moving from `from` to each node.
/// Row [`Node::Origin`] scores the choice of the first facility. The
/// diagonal is zero and never read, since a facility cannot follow itself.
///
/// Entries are stored flattened, row-major, `(N + 1) × (N + 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneStore {
    dim: usize,
    values: Vec<f64>,
}

impl PheromoneStore {
    /// Creates a store for `facilities` facilities with every off-diagonal
    /// entry drawn independently from `[min, max)`.
    ///
    /// # Panics
    /// Panics if `min >= max`.
    pub fn random<R: Rng>(facilities: usize, min: f64, max: f64, rng: &mut R) -> Self {
        let mut store = Self::filled(facilities, 0.0);
        let dim = store.dim;
        for from in 0..dim {
            for to in 0..dim {
                if from != to {
                    store.values[from * dim + to] = rng.random_range(min..max);
                }
            }
        }
        store
    }

    /// Creates a store with every off-diagonal entry set to `value`.
    pub fn filled(facilities: usize, value: f64) -> Self {
        let dim = facilities + 1;
        let mut values = vec![value; dim * dim];
        for i in 0..dim {
            values[i * dim + i] = 0.0;
        }
        Self { dim, values }
    }

    /// Number of facilities `N`.
    #[inline]
    pub fn facilities(&self) -> usize {
        self.dim - 1
    }

    /// Side length of the matrix (`N + 1`).
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Pheromone on the edge `from → to`.
    #[inline]
    pub fn get(&self, from: Node, to: Node) -> f64 {
        self.values[from.index() * self.dim + to.index()]
    }

    /// Overwrites the pheromone on the edge `from → to`.
    #[inline]
    pub fn set(&mut self, from: Node, to: Node, value: f64) {
        self.values[from.index() * self.dim + to.index()] = value;
    }

    /// All outgoing weights of `from`, indexed by node index.
    #[inline]
    pub fn row(&self, from: Node) -> &[f64] {
        let start = from.index() * self.dim;
        &self.values[start..start + self.dim]
    }

    /// Iterates over every entry, diagonal included.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Multiplies every entry by `rate`.
    ///
    /// No floor is applied: entries may decay to zero, which path
    /// construction handles through its uniform fallback.
    pub fn evaporate(&mut self, rate: f64) {
        for value in &mut self.values {
            *value *= rate;
        }
    }

    /// Adds the deposit to every edge of its path, in both directions.
    ///
    /// The reinforced edges are `Origin → path[0]` and each consecutive pair
    /// `path[i] → path[i + 1]`. The path is not treated as a cycle.
    pub fn reinforce(&mut self, deposit: &Deposit<'_>) {
        let Some(&first) = deposit.path.first() else {
            return;
        };
        self.add_symmetric(Node::Origin, Node::Facility(first), deposit.amount);
        for pair in deposit.path.windows(2) {
            self.add_symmetric(
                Node::Facility(pair[0]),
                Node::Facility(pair[1]),
                deposit.amount,
            );
        }
    }

    fn add_symmetric(&mut self, a: Node, b: Node, amount: f64) {
        let (a, b) = (a.index(), b.index());
        self.values[a * self.dim + b] += amount;
        self.values[b * self.dim + a] += amount;
    }
}

/// A request to reinforce the edges of one path.
///
/// Ants produce deposits; only the colony applies them to its store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deposit<'a> {
    /// The path whose edges are reinforced.
    pub path: &'a [usize],
    /// Amount added to each edge, `K / fitness`.
    pub amount: f64,
}
