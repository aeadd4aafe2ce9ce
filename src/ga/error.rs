//! Engine error types.

use super::types::BoxError;
use thiserror::Error;

/// Errors reported by [`GaEngine`](super::GaEngine).
///
/// Failures raised by caller-supplied operators are carried unchanged as
/// the error [`source`](std::error::Error::source).
#[derive(Error, Debug)]
pub enum GaError {
    /// `population_size` < 2 or another config constraint failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The engine was built with no initial genotypes.
    #[error("initial population must not be empty")]
    EmptyPopulation,

    /// The fitness function returned a batch of the wrong length.
    #[error("fitness function returned {actual} values for {expected} genotypes")]
    FitnessCountMismatch { expected: usize, actual: usize },

    /// The fitness function returned NaN or an infinity.
    #[error("fitness function returned non-finite value {value} at batch index {index}")]
    NonFiniteFitness { index: usize, value: f64 },

    /// A best/mean query ran before any genotype was scored.
    #[error("no genotype has been scored yet")]
    NoScoredGenotypes,

    /// The caller's fitness function failed.
    #[error("fitness evaluation failed")]
    Fitness(#[source] BoxError),

    /// The caller's mutation operator failed.
    #[error("mutation failed")]
    Mutation(#[source] BoxError),

    /// The caller's crossover operator failed.
    #[error("crossover failed")]
    Crossover(#[source] BoxError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_count_mismatch_message() {
        let err = GaError::FitnessCountMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "fitness function returned 3 values for 4 genotypes"
        );
    }

    #[test]
    fn test_operator_error_keeps_source() {
        let err = GaError::Mutation("out of bounds".into());
        let source = err.source().expect("source preserved");
        assert_eq!(source.to_string(), "out of bounds");
    }
}
