//! Pairwise tournament competition.
//!
//! Turns a ranked population into the next generation:
//!
//! 1. The top `elite_count` genotypes are copied through with their scores.
//! 2. The rest are shuffled and split into disjoint consecutive pairs.
//! 3. Each pair's winner (per [`GaProblem::does_a_beat_b`]) survives with
//!    its score; the loser's slot receives one unscored offspring of the
//!    winner, bred by crossover with probability `crossover_probability`
//!    and by mutation otherwise.
//! 4. An unpaired last genotype passes through unchanged.
//!
//! The output has the same size as the input. A genotype can only be
//! removed by losing to one that beats it, so fitter genotypes are never
//! less likely to survive than weaker ones.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use super::error::GaError;
use super::population::Entry;
use super::types::{GaProblem, ScoredGenotype};
use crate::random::shuffle;
use rand::Rng;
use std::cmp::Ordering;

/// Sorts best-first by the problem's dominance predicate.
///
/// The sort is stable: genotypes neither of which beats the other keep
/// their relative order.
pub(crate) fn sort_best_first<P: GaProblem>(
    problem: &P,
    population: &mut [ScoredGenotype<P::Genotype>],
) {
    population.sort_by(|a, b| dominance(problem, a, b));
}

/// `Less` when only `a` beats `b`, `Greater` when only `b` beats `a`.
///
/// A predicate that reports both directions (e.g. `>=` on equal fitness)
/// is treated as a tie, so the order handed to the sort stays antisymmetric.
pub(crate) fn dominance<P: GaProblem>(
    problem: &P,
    a: &ScoredGenotype<P::Genotype>,
    b: &ScoredGenotype<P::Genotype>,
) -> Ordering {
    match (problem.does_a_beat_b(a, b), problem.does_a_beat_b(b, a)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Produces the next generation from a best-first `ranked` population.
///
/// Returns the new entries and the number of offspring bred.
pub(crate) fn compete<P: GaProblem, R: Rng>(
    problem: &P,
    ranked: &[ScoredGenotype<P::Genotype>],
    elite_count: usize,
    crossover_probability: f64,
    rng: &mut R,
) -> Result<(Vec<Entry<P::Genotype>>, usize), GaError> {
    let n = ranked.len();
    let elite_count = elite_count.min(n);

    let mut next: Vec<Entry<P::Genotype>> = Vec::with_capacity(n);
    next.extend(ranked[..elite_count].iter().cloned().map(Entry::from));

    let mut contenders: Vec<usize> = (elite_count..n).collect();
    shuffle(&mut contenders, rng);

    let mut offspring = 0;
    for pair in contenders.chunks(2) {
        let &[a, b] = pair else {
            next.push(ranked[pair[0]].clone().into());
            continue;
        };

        let winner = if dominance(problem, &ranked[a], &ranked[b]) == Ordering::Greater {
            &ranked[b]
        } else {
            &ranked[a]
        };

        let child = breed(problem, winner, ranked, crossover_probability, rng)?;
        next.push(winner.clone().into());
        next.push(Entry::unscored(child));
        offspring += 1;
    }

    Ok((next, offspring))
}

/// Breeds one offspring from `winner`.
///
/// A crossover draw picks a uniformly random mate from `ranked`; when the
/// problem has no crossover operator the draw falls back to mutation.
fn breed<P: GaProblem, R: Rng>(
    problem: &P,
    winner: &ScoredGenotype<P::Genotype>,
    ranked: &[ScoredGenotype<P::Genotype>],
    crossover_probability: f64,
    rng: &mut R,
) -> Result<P::Genotype, GaError> {
    if rng.random_bool(crossover_probability) {
        let mate = &ranked[rng.random_range(0..ranked.len())];
        let child = problem
            .crossover(&winner.genotype, &mate.genotype, rng)
            .map_err(GaError::Crossover)?;
        if let Some(child) = child {
            return Ok(child);
        }
    }
    problem
        .mutate(&winner.genotype, rng)
        .map_err(GaError::Mutation)
}
