//! Core trait definitions for the evolution engine.
//!
//! [`GaProblem`] is the contract between the generic engine and the
//! caller's problem: it supplies the batched fitness function, the
//! mutation operator, and optionally a crossover operator and a custom
//! dominance predicate.

use rand::Rng;
use std::future::Future;

/// Error type returned by caller-supplied operators.
///
/// The engine never inspects these errors; it wraps them in the matching
/// [`GaError`](super::GaError) variant and keeps them as the error source.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A genotype paired with its cached fitness.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredGenotype<G> {
    /// The candidate solution.
    pub genotype: G,

    /// Its fitness. Always finite.
    pub fitness: f64,
}

impl<G> ScoredGenotype<G> {
    /// Pairs a genotype with a fitness value.
    pub fn new(genotype: G, fitness: f64) -> Self {
        Self { genotype, fitness }
    }
}

/// Defines an evolutionary optimization problem.
///
/// # Required
///
/// - [`evaluate`](GaProblem::evaluate): batched, asynchronous fitness
/// - [`mutate`](GaProblem::mutate): produce a perturbed copy of one parent
///
/// # Optional
///
/// - [`crossover`](GaProblem::crossover): combine two parents. The default
///   returns `Ok(None)`, which disables crossover: every slot that draws
///   crossover is filled by mutation instead.
/// - [`does_a_beat_b`](GaProblem::does_a_beat_b): dominance predicate.
///   The default is "higher fitness wins".
/// - [`on_generation`](GaProblem::on_generation): progress hook used by
///   [`GaEngine::evolve`](super::GaEngine::evolve).
///
/// # Implementing
///
/// ```
/// use rand::Rng;
/// use u_evolve::ga::{BoxError, GaProblem};
///
/// struct Target;
///
/// impl GaProblem for Target {
///     type Genotype = i64;
///
///     async fn evaluate(&self, genotypes: Vec<i64>) -> Result<Vec<f64>, BoxError> {
///         Ok(genotypes
///             .iter()
///             .map(|x| 1.0 / ((10 - x).abs() as f64 + 1.0))
///             .collect())
///     }
///
///     fn mutate<R: Rng>(&self, parent: &i64, rng: &mut R) -> Result<i64, BoxError> {
///         Ok(parent + rng.random_range(-5..=5))
///     }
/// }
/// ```
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` and `evaluate` must return a `Send`
/// future, so that an engine can be driven from a multi-threaded runtime.
/// How `evaluate` spreads work across workers is up to the implementor;
/// the engine only awaits the batch result.
pub trait GaProblem: Send + Sync {
    /// The candidate-solution type. The engine never looks inside it.
    type Genotype: Clone + Send + Sync;

    /// Scores a batch of genotypes.
    ///
    /// Must return exactly one finite fitness per genotype, in the same
    /// order. The engine calls this at most once per rank and never while
    /// another call on the same engine is pending.
    fn evaluate(
        &self,
        genotypes: Vec<Self::Genotype>,
    ) -> impl Future<Output = Result<Vec<f64>, BoxError>> + Send;

    /// Returns a randomly perturbed copy of `parent`.
    fn mutate<R: Rng>(&self, parent: &Self::Genotype, rng: &mut R)
        -> Result<Self::Genotype, BoxError>;

    /// Returns an offspring combining `parent1` and `parent2`.
    ///
    /// `Ok(None)` means this problem has no crossover operator.
    fn crossover<R: Rng>(
        &self,
        _parent1: &Self::Genotype,
        _parent2: &Self::Genotype,
        _rng: &mut R,
    ) -> Result<Option<Self::Genotype>, BoxError> {
        Ok(None)
    }

    /// Returns `true` if `a` dominates `b`.
    ///
    /// Used both to sort the population and to decide each pairwise
    /// competition. Implementations should be a strict ordering: never true
    /// for both `(a, b)` and `(b, a)`, and transitive. A pair reported as
    /// beating each other (a non-strict `>=`) is treated as a tie.
    fn does_a_beat_b(
        &self,
        a: &ScoredGenotype<Self::Genotype>,
        b: &ScoredGenotype<Self::Genotype>,
    ) -> bool {
        a.fitness > b.fitness
    }

    /// Called after each generation completed by
    /// [`GaEngine::evolve`](super::GaEngine::evolve).
    ///
    /// `best_fitness` is `None` only if nothing has been scored.
    fn on_generation(&self, _generation: usize, _best_fitness: Option<f64>) {}
}
