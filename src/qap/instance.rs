//! Quadratic Assignment Problem instance.

use crate::aco::AcoProblem;
use crate::error::ValidationError;

/// An immutable QAP instance: `N` locations with pairwise distances and
/// `N` facilities with pairwise flows.
///
/// Both matrices are validated to be `N × N` on construction; entries are
/// nonnegative by type.
///
/// # Examples
///
/// ```
/// use u_aco::qap::QapInstance;
///
/// let qap = QapInstance::new(
///     2,
///     vec![vec![0, 3], vec![3, 0]],
///     vec![vec![0, 2], vec![2, 0]],
/// ).unwrap();
/// assert_eq!(qap.assignment_cost(&[1, 2]), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QapInstance {
    n: usize,
    distances: Vec<Vec<u64>>,
    flows: Vec<Vec<u64>>,
}

impl QapInstance {
    /// Creates an instance, checking that `n > 0` and both matrices are
    /// `n × n`.
    pub fn new(
        n: usize,
        distances: Vec<Vec<u64>>,
        flows: Vec<Vec<u64>>,
    ) -> Result<Self, ValidationError> {
        if n == 0 {
            return Err(ValidationError::EmptyInstance);
        }
        check_square("distance", &distances, n)?;
        check_square("flow", &flows, n)?;
        Ok(Self {
            n,
            distances,
            flows,
        })
    }

    /// Number of facilities (and locations).
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Location-to-location distances, 0-based.
    pub fn distances(&self) -> &[Vec<u64>] {
        &self.distances
    }

    /// Facility-to-facility flows, 0-based.
    pub fn flows(&self) -> &[Vec<u64>] {
        &self.flows
    }

    /// QAP cost of a path: `Σ_i Σ_j D[i][j] · F[path[i] - 1][path[j] - 1]`.
    ///
    /// `path[i]` is the 1-based facility placed at location `i`. Products
    /// and sums saturate at `u64::MAX`.
    ///
    /// # Panics
    /// Panics if a facility ID is outside `1..=N`.
    pub fn assignment_cost(&self, path: &[usize]) -> u64 {
        debug_assert_eq!(path.len(), self.n, "path length must equal N");
        let mut total = 0u64;
        for (i, &fi) in path.iter().enumerate() {
            let d_row = &self.distances[i];
            let f_row = &self.flows[fi - 1];
            for (j, &fj) in path.iter().enumerate() {
                total = total.saturating_add(d_row[j].saturating_mul(f_row[fj - 1]));
            }
        }
        total
    }

    /// Exhaustively finds an optimal path and its cost.
    ///
    /// Intended for small instances (the search visits all `N!`
    /// permutations) such as test fixtures.
    pub fn brute_force_optimum(&self) -> (Vec<usize>, u64) {
        let mut perm: Vec<usize> = (1..=self.n).collect();
        let mut best = perm.clone();
        let mut best_cost = self.assignment_cost(&perm);

        // Heap's algorithm, iterative form.
        let mut counters = vec![0usize; self.n];
        let mut i = 1;
        while i < self.n {
            if counters[i] < i {
                let k = if i % 2 == 0 { 0 } else { counters[i] };
                perm.swap(k, i);
                let cost = self.assignment_cost(&perm);
                if cost < best_cost {
                    best_cost = cost;
                    best.copy_from_slice(&perm);
                }
                counters[i] += 1;
                i = 1;
            } else {
                counters[i] = 0;
                i += 1;
            }
        }

        (best, best_cost)
    }
}

impl AcoProblem for QapInstance {
    fn size(&self) -> usize {
        self.n
    }

    fn cost(&self, path: &[usize]) -> f64 {
        self.assignment_cost(path) as f64
    }
}

fn check_square(
    matrix: &'static str,
    rows: &[Vec<u64>],
    n: usize,
) -> Result<(), ValidationError> {
    if rows.len() != n {
        return Err(ValidationError::MatrixShape {
            matrix,
            expected: n,
            row: None,
            found: rows.len(),
        });
    }
    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(ValidationError::MatrixShape {
            matrix,
            expected: n,
            row: Some(row),
            found: r.len(),
        });
    }
    Ok(())
}
