//! Fitness cache.
//!
//! Scores only the entries that lack a cached fitness (or all of them when
//! recalculation is forced), with one batched call to
//! [`GaProblem::evaluate`], and merges the results back in place of the
//! old entries.

use super::error::GaError;
use super::population::Entry;
use super::types::{GaProblem, ScoredGenotype};
use tracing::warn;

/// Outcome of one rank pass.
#[derive(Debug)]
pub(crate) struct Ranked<G> {
    /// Every entry with a fitness, in the original population order.
    pub scored: Vec<ScoredGenotype<G>>,

    /// Number of genotypes sent to the fitness function.
    pub evaluated: usize,
}

/// Scores `entries`, reusing cached fitness unless `force` is set.
///
/// Makes no call to the fitness function when nothing needs scoring. The
/// returned set is built in full before anything is handed back, so a
/// failed evaluation leaves the caller's entries untouched.
pub(crate) async fn rank<P: GaProblem>(
    problem: &P,
    entries: &[Entry<P::Genotype>],
    force: bool,
) -> Result<Ranked<P::Genotype>, GaError> {
    let pending: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| force || e.fitness.is_none())
        .map(|(i, _)| i)
        .collect();

    let mut fresh: Vec<Option<f64>> = vec![None; entries.len()];
    if !pending.is_empty() {
        let batch: Vec<P::Genotype> = pending
            .iter()
            .map(|&i| entries[i].genotype.clone())
            .collect();

        let scores = problem.evaluate(batch).await.map_err(GaError::Fitness)?;

        if scores.len() != pending.len() {
            warn!(
                expected = pending.len(),
                actual = scores.len(),
                "fitness function broke its batch contract"
            );
            return Err(GaError::FitnessCountMismatch {
                expected: pending.len(),
                actual: scores.len(),
            });
        }
        if let Some((index, &value)) = scores.iter().enumerate().find(|(_, f)| !f.is_finite()) {
            warn!(index, value, "fitness function returned a non-finite score");
            return Err(GaError::NonFiniteFitness { index, value });
        }

        for (&i, score) in pending.iter().zip(scores) {
            fresh[i] = Some(score);
        }
    }

    let scored = entries
        .iter()
        .zip(fresh)
        .filter_map(|(e, new)| {
            new.or(e.fitness)
                .map(|fitness| ScoredGenotype::new(e.genotype.clone(), fitness))
        })
        .collect();

    Ok(Ranked {
        scored,
        evaluated: pending.len(),
    })
}
