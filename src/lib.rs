//! Generic, pluggable evolutionary optimization.
//!
//! Provides a generational engine that evolves a population of
//! caller-defined genotypes:
//!
//! - **Fitness caching**: genotypes are scored once, in asynchronous
//!   batches, and keep their score until they are replaced.
//! - **Pairwise tournament competition** with elitism: winners survive,
//!   losers are replaced by mutated or crossed-over offspring.
//! - **Replenishment**: the population is regrown to its target size
//!   before every generation, so the target can change mid-run.
//!
//! The engine knows nothing about the problem it optimizes: fitness,
//! mutation, crossover and the dominance predicate all come from the
//! caller through [`ga::GaProblem`].
//!
//! # Modules
//!
//! - [`ga`]: The engine, its configuration and errors
//! - [`random`]: Seedable random number generation

pub mod ga;
pub mod random;
