//! Population store and replenishment.

use super::error::GaError;
use super::types::{GaProblem, ScoredGenotype};
use rand::Rng;
use tracing::trace;

/// One member of the population: a genotype and its cached fitness.
///
/// `fitness == None` means "not yet evaluated"; every operator that creates
/// a new genotype produces an entry in this state.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry<G> {
    pub genotype: G,
    pub fitness: Option<f64>,
}

impl<G> Entry<G> {
    pub fn unscored(genotype: G) -> Self {
        Self {
            genotype,
            fitness: None,
        }
    }
}

impl<G> From<ScoredGenotype<G>> for Entry<G> {
    fn from(scored: ScoredGenotype<G>) -> Self {
        Self {
            genotype: scored.genotype,
            fitness: Some(scored.fitness),
        }
    }
}

/// The engine's population.
///
/// Only the engine mutates it, and only by swapping in a whole new set of
/// entries via [`replace`](Population::replace).
#[derive(Debug, Clone)]
pub(crate) struct Population<G> {
    entries: Vec<Entry<G>>,
}

impl<G: Clone> Population<G> {
    /// Builds an all-unscored population.
    pub fn from_genotypes(genotypes: Vec<G>) -> Result<Self, GaError> {
        if genotypes.is_empty() {
            return Err(GaError::EmptyPopulation);
        }
        Ok(Self {
            entries: genotypes.into_iter().map(Entry::unscored).collect(),
        })
    }

    pub fn entries(&self) -> &[Entry<G>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Genotype snapshot, fitness dropped.
    pub fn genotypes(&self) -> Vec<G> {
        self.entries.iter().map(|e| e.genotype.clone()).collect()
    }

    /// Entries that currently hold a cached fitness.
    pub fn scored(&self) -> impl Iterator<Item = ScoredGenotype<&G>> {
        self.entries.iter().filter_map(|e| {
            e.fitness
                .map(|fitness| ScoredGenotype::new(&e.genotype, fitness))
        })
    }

    /// Swaps in a new set of entries.
    pub fn replace(&mut self, entries: Vec<Entry<G>>) {
        self.entries = entries;
    }
}

/// Grows `entries` to `target` by appending unscored mutants of uniformly
/// chosen existing members.
///
/// Parents are drawn from the members present before the call. Returns the
/// number of entries added. Does nothing if `entries` is empty or already
/// at or above `target`.
pub(crate) fn replenish<P: GaProblem, R: Rng>(
    problem: &P,
    entries: &mut Vec<Entry<P::Genotype>>,
    target: usize,
    rng: &mut R,
) -> Result<usize, GaError> {
    let existing = entries.len();
    if existing == 0 || existing >= target {
        return Ok(0);
    }

    entries.reserve(target - existing);
    while entries.len() < target {
        let parent = &entries[rng.random_range(0..existing)].genotype;
        let child = problem.mutate(parent, rng).map_err(GaError::Mutation)?;
        entries.push(Entry::unscored(child));
    }

    trace!(added = target - existing, target, "replenished population");
    Ok(target - existing)
}
