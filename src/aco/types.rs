//! Core trait and node addressing for the ACO engine.

/// Defines a permutation problem solved by the colony.
///
/// A path is a permutation of the facility IDs `1..=size()`, listed
/// position by position. The colony handles pheromone bookkeeping, path
/// construction and best tracking; the problem only scores paths.
///
/// # Minimization
///
/// The colony minimizes [`cost`](AcoProblem::cost). Pheromone deposits are
/// proportional to `K / cost`, so costs are expected to be nonnegative.
///
/// # Examples
///
/// ```
/// use u_aco::aco::AcoProblem;
///
/// struct Displacement { n: usize }
///
/// impl AcoProblem for Displacement {
///     fn size(&self) -> usize { self.n }
///
///     fn cost(&self, path: &[usize]) -> f64 {
///         path.iter()
///             .enumerate()
///             .map(|(pos, &id)| (pos + 1).abs_diff(id) as f64)
///             .sum()
///     }
/// }
///
/// assert_eq!(Displacement { n: 3 }.cost(&[1, 2, 3]), 0.0);
/// ```
pub trait AcoProblem: Send + Sync {
    /// Number of facilities `N`.
    fn size(&self) -> usize;

    /// Cost of a path. Lower is better.
    ///
    /// `path` always has length `size()` and holds each of `1..=size()`
    /// exactly once.
    fn cost(&self, path: &[usize]) -> f64;
}

/// A node of the construction graph.
///
/// The pheromone store has one row/column per facility plus a leading
/// [`Node::Origin`] row that scores the choice of the first facility.
/// Keeping the origin as its own variant keeps 1-based facility IDs apart
/// from the 0-based matrix indices used by the problem data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    /// The pseudo-start node: nothing has been placed yet.
    Origin,
    /// A facility, identified by its 1-based ID.
    Facility(usize),
}

impl Node {
    /// Row/column of this node in the pheromone store.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Node::Origin => 0,
            Node::Facility(id) => id,
        }
    }
}
