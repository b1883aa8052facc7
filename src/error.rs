//! Validation errors raised before any search work begins.

use std::fmt::Display;

/// An invalid argument passed to an instance, colony or run constructor.
///
/// Validation errors are never coerced: they are reported as soon as the
/// offending value is seen and the search does not start.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The colony was configured with zero ants.
    ZeroAnts,
    /// The problem has no facilities (`N = 0`).
    EmptyInstance,
    /// The evaporation rate is outside `[0.0, 1.0]` or not a number.
    EvaporationRateOutOfRange(f64),
    /// The deposit constant `K` is not a positive finite number.
    NonPositiveDepositConstant(f64),
    /// The initial pheromone range is empty, non-positive or non-finite.
    InvalidPheromoneRange {
        /// Lower bound of the range.
        min: f64,
        /// Upper bound of the range.
        max: f64,
    },
    /// A matrix does not have `N` rows of `N` entries.
    MatrixShape {
        /// Which matrix was malformed (`"distance"` or `"flow"`).
        matrix: &'static str,
        /// The expected side length `N`.
        expected: usize,
        /// Index of the first offending row, or `None` if the row count is wrong.
        row: Option<usize>,
        /// The length that was found (row count, or the row's length).
        found: usize,
    },
    /// `run` was asked for zero fitness evaluations.
    ZeroEvaluations,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroAnts => write!(f, "ant count must be at least 1"),
            Self::EmptyInstance => write!(f, "problem instance must have at least one facility"),
            Self::EvaporationRateOutOfRange(rate) => {
                write!(f, "evaporation rate must be in [0, 1], got {rate}")
            }
            Self::NonPositiveDepositConstant(k) => {
                write!(f, "deposit constant must be positive and finite, got {k}")
            }
            Self::InvalidPheromoneRange { min, max } => write!(
                f,
                "initial pheromone range must satisfy 0 < min < max, got [{min}, {max})"
            ),
            Self::MatrixShape {
                matrix,
                expected,
                row: None,
                found,
            } => write!(f, "{matrix} matrix has {found} rows, expected {expected}"),
            Self::MatrixShape {
                matrix,
                expected,
                row: Some(row),
                found,
            } => write!(
                f,
                "{matrix} matrix row {row} has {found} entries, expected {expected}"
            ),
            Self::ZeroEvaluations => write!(f, "fitness evaluation budget must be at least 1"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matrix_shape() {
        let err = ValidationError::MatrixShape {
            matrix: "flow",
            expected: 3,
            row: Some(1),
            found: 2,
        };
        assert_eq!(err.to_string(), "flow matrix row 1 has 2 entries, expected 3");

        let err = ValidationError::MatrixShape {
            matrix: "distance",
            expected: 3,
            row: None,
            found: 4,
        };
        assert_eq!(err.to_string(), "distance matrix has 4 rows, expected 3");
    }

    #[test]
    fn test_display_rate() {
        let err = ValidationError::EvaporationRateOutOfRange(1.5);
        assert!(err.to_string().contains("1.5"));
    }
}
