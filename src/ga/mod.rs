//! Generational evolution engine.
//!
//! A generic, domain-agnostic engine for evolving a population of
//! caller-defined genotypes. Callers implement [`GaProblem`], which supplies
//! the batched asynchronous fitness function, the mutation operator, and
//! optionally a crossover operator and a dominance predicate.
//!
//! # Generation Step
//!
//! Each call to [`GaEngine::advance_generation`]:
//!
//! 1. **Replenishes** the population to the target size with mutants of
//!    randomly chosen members.
//! 2. **Ranks** it, sending only genotypes without a cached fitness to
//!    [`GaProblem::evaluate`] in one batch.
//! 3. **Culls** the weakest if the target size shrank.
//! 4. **Competes**: elites pass through, the rest meet in shuffled pairs,
//!    and each loser is replaced by an offspring of the winner.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Target size, crossover probability, elitism, recalculation
//! - [`GaEngine`]: Owns the population and runs generations
//! - [`ScoredGenotype`]: A genotype with its cached fitness
//! - [`GaError`]: Everything that can go wrong
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod cache;
mod competition;
mod config;
mod engine;
mod error;
pub mod evaluate;
mod population;
mod types;

pub use config::{Elitism, GaConfig};
pub use engine::{EvolutionSummary, GaEngine};
pub use error::GaError;
pub use types::{BoxError, GaProblem, ScoredGenotype};
