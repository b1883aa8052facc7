//! Roulette-wheel selection over candidate weights.

use rand::Rng;

/// Outcome of a candidate selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Drawn proportionally to the candidate weights.
    Weighted(usize),
    /// Drawn uniformly among allowed candidates because the weights summed
    /// to zero (or to a non-finite value).
    Uniform(usize),
}

impl Choice {
    /// The selected candidate index.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Choice::Weighted(i) | Choice::Uniform(i) => i,
        }
    }

    /// Whether the uniform fallback was used.
    #[inline]
    pub fn is_fallback(self) -> bool {
        matches!(self, Choice::Uniform(_))
    }
}

/// Selects an index with probability `weights[i] / Σ weights`.
///
/// Uses prefix-sum sampling: draws `r ∈ [0, total)` and returns the first
/// index whose cumulative weight exceeds `r`. Entries with `allowed[i] ==
/// false` must carry weight zero and are never returned.
///
/// When the total weight is zero or not finite, falls back to a uniform
/// draw over the allowed indices. Returns `None` only if nothing is allowed.
///
/// # Panics
/// Panics if `weights` and `allowed` differ in length.
pub fn select_candidate<R: Rng>(weights: &[f64], allowed: &[bool], rng: &mut R) -> Option<Choice> {
    assert_eq!(
        weights.len(),
        allowed.len(),
        "weights and allowed mask must have the same length"
    );

    let total: f64 = weights.iter().sum();
    if total > 0.0 && total.is_finite() {
        let threshold = rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        let mut last_positive = None;
        for (i, &w) in weights.iter().enumerate() {
            if w <= 0.0 {
                continue;
            }
            cumulative += w;
            last_positive = Some(i);
            if cumulative > threshold {
                return Some(Choice::Weighted(i));
            }
        }
        // Rounding left the threshold at the very top of the wheel.
        if let Some(i) = last_positive {
            return Some(Choice::Weighted(i));
        }
    }

    let count = allowed.iter().filter(|&&a| a).count();
    if count == 0 {
        return None;
    }
    let pick = rng.random_range(0..count);
    allowed
        .iter()
        .enumerate()
        .filter(|&(_, &a)| a)
        .nth(pick)
        .map(|(i, _)| Choice::Uniform(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_single_positive_weight() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let weights = [0.0, 0.0, 3.0, 0.0];
        let allowed = [false, true, true, true];
        for _ in 0..100 {
            assert_eq!(
                select_candidate(&weights, &allowed, &mut rng),
                Some(Choice::Weighted(2))
            );
        }
    }

    #[test]
    fn test_proportional_frequencies() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let weights = [0.0, 1.0, 3.0];
        let allowed = [false, true, true];
        let trials = 20_000;
        let mut hits = [0usize; 3];
        for _ in 0..trials {
            let choice = select_candidate(&weights, &allowed, &mut rng).unwrap();
            assert!(!choice.is_fallback());
            hits[choice.index()] += 1;
        }
        assert_eq!(hits[0], 0);
        let ratio = hits[2] as f64 / trials as f64;
        assert!(
            (ratio - 0.75).abs() < 0.02,
            "expected ~0.75 share for weight 3, got {ratio}"
        );
    }

    #[test]
    fn test_zero_weights_fall_back_to_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let weights = [0.0; 5];
        let allowed = [false, true, false, true, true];
        let mut seen = [false; 5];
        for _ in 0..200 {
            let choice = select_candidate(&weights, &allowed, &mut rng).unwrap();
            assert!(choice.is_fallback(), "zero-sum weights must use the fallback");
            assert!(allowed[choice.index()], "fallback picked a disallowed index");
            seen[choice.index()] = true;
        }
        assert_eq!(seen, [false, true, false, true, true]);
    }

    #[test]
    fn test_non_finite_total_falls_back() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let weights = [0.0, f64::INFINITY, 1.0];
        let allowed = [false, true, true];
        let choice = select_candidate(&weights, &allowed, &mut rng).unwrap();
        assert!(choice.is_fallback());
    }

    #[test]
    fn test_nothing_allowed() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(select_candidate(&[0.0, 0.0], &[false, false], &mut rng), None);
    }
}
