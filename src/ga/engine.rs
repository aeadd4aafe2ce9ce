//! Generational engine.
//!
//! [`GaEngine`] owns the population and drives one generation per
//! [`advance_generation`](GaEngine::advance_generation) call:
//! replenishment → rank (cached fitness) → cull → competition.

use super::cache;
use super::competition::{compete, dominance, sort_best_first};
use super::config::GaConfig;
use super::error::GaError;
use super::population::{replenish, Entry, Population};
use super::types::{GaProblem, ScoredGenotype};
use crate::random::{rng_from_seed, EngineRng};
use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Summary of an [`evolve`](GaEngine::evolve) run.
#[derive(Debug, Clone)]
pub struct EvolutionSummary<G> {
    /// Best scored genotype at the end of the run, if any.
    pub best: Option<ScoredGenotype<G>>,

    /// Generations completed during this run.
    pub generations: usize,

    /// Whether the run stopped on the cancellation flag.
    pub cancelled: bool,

    /// Best cached fitness after each completed generation.
    pub fitness_history: Vec<f64>,
}

/// Evolutionary engine over a caller-defined genotype.
///
/// # Usage
///
/// ```
/// use rand::Rng;
/// use u_evolve::ga::{BoxError, GaConfig, GaEngine, GaProblem};
///
/// struct Target;
///
/// impl GaProblem for Target {
///     type Genotype = i64;
///
///     async fn evaluate(&self, genotypes: Vec<i64>) -> Result<Vec<f64>, BoxError> {
///         Ok(genotypes.iter().map(|x| -((10 - x).abs() as f64)).collect())
///     }
///
///     fn mutate<R: Rng>(&self, parent: &i64, rng: &mut R) -> Result<i64, BoxError> {
///         Ok(parent + rng.random_range(-3..=3))
///     }
/// }
///
/// # async fn demo() -> Result<(), u_evolve::ga::GaError> {
/// let config = GaConfig::default().with_population_size(20).with_seed(1);
/// let mut engine = GaEngine::new(Target, config, vec![0])?;
/// engine.advance_generation(None).await?;
/// assert_eq!(engine.current_population().len(), 20);
/// # Ok(())
/// # }
/// ```
///
/// # Concurrency
///
/// Every operation that touches the population takes `&mut self`, so one
/// engine can never run two generation steps, or two fitness calls, at
/// the same time. Separate engines share nothing and may be driven
/// concurrently.
pub struct GaEngine<P: GaProblem> {
    problem: P,
    config: GaConfig,
    population: Population<P::Genotype>,
    rng: EngineRng,
    generation: usize,
}

impl<P: GaProblem> GaEngine<P> {
    /// Builds an engine from an initial population.
    ///
    /// All initial genotypes start unscored. The population does not need
    /// to match `config.population_size`; the first generation step grows
    /// or culls it.
    ///
    /// # Errors
    ///
    /// [`GaError::InvalidConfig`] if `config` fails validation,
    /// [`GaError::EmptyPopulation`] if `initial` is empty.
    pub fn new(problem: P, config: GaConfig, initial: Vec<P::Genotype>) -> Result<Self, GaError> {
        config.validate()?;
        let population = Population::from_genotypes(initial)?;
        let rng = rng_from_seed(config.seed);
        Ok(Self {
            problem,
            config,
            population,
            rng,
            generation: 0,
        })
    }

    /// Runs one generation.
    ///
    /// With `Some(config)`, the new configuration is validated and replaces
    /// the current one before the step runs; it stays in effect for later
    /// calls. Its `seed` is ignored.
    ///
    /// # Errors
    ///
    /// - [`GaError::InvalidConfig`]: the override failed validation; nothing
    ///   changes.
    /// - [`GaError::FitnessCountMismatch`], [`GaError::NonFiniteFitness`],
    ///   [`GaError::Fitness`]: the population is left as it was before the
    ///   call.
    /// - [`GaError::Mutation`], [`GaError::Crossover`]: a failure during
    ///   replenishment leaves the population as it was; a failure during
    ///   competition leaves the freshly scored population of this step.
    pub async fn advance_generation(&mut self, config: Option<GaConfig>) -> Result<(), GaError> {
        if let Some(config) = config {
            config.validate()?;
            self.config = GaConfig {
                seed: self.config.seed,
                ..config
            };
        }
        let target = self.config.population_size;

        let mut working = self.population.entries().to_vec();
        replenish(&self.problem, &mut working, target, &mut self.rng)?;

        let ranked =
            cache::rank(&self.problem, &working, self.config.recalculate_fitness).await?;
        let evaluated = ranked.evaluated;
        let mut ranked = ranked.scored;

        self.population
            .replace(ranked.iter().cloned().map(Entry::from).collect());

        sort_best_first(&self.problem, &mut ranked);
        if ranked.len() > target {
            trace!(from = ranked.len(), to = target, "culling population");
            ranked.truncate(target);
        }

        let (next, offspring) = compete(
            &self.problem,
            &ranked,
            self.config.elite_count(),
            self.config.crossover_probability,
            &mut self.rng,
        )?;
        self.population.replace(next);
        self.generation += 1;

        debug!(
            generation = self.generation,
            evaluated,
            cache_hits = ranked.len().saturating_sub(evaluated),
            offspring,
            best_fitness = ?ranked.first().map(|s| s.fitness),
            "generation complete"
        );
        Ok(())
    }

    /// Runs `generations` steps with the current configuration.
    pub async fn evolve(
        &mut self,
        generations: usize,
    ) -> Result<EvolutionSummary<P::Genotype>, GaError> {
        self.evolve_with_cancel(generations, None).await
    }

    /// Runs up to `generations` steps, stopping early once `cancel` is set.
    ///
    /// The flag is checked before each step. After every completed step
    /// [`GaProblem::on_generation`] is called with the best cached fitness.
    pub async fn evolve_with_cancel(
        &mut self,
        generations: usize,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<EvolutionSummary<P::Genotype>, GaError> {
        let mut fitness_history = Vec::with_capacity(generations);
        let mut cancelled = false;
        let mut completed = 0;

        for _ in 0..generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            self.advance_generation(None).await?;
            completed += 1;

            let best = self.best_fitness().ok();
            if let Some(fitness) = best {
                fitness_history.push(fitness);
            }
            self.problem.on_generation(self.generation, best);
        }

        Ok(EvolutionSummary {
            best: self.best_genotype_with_fitness().ok(),
            generations: completed,
            cancelled,
            fitness_history,
        })
    }

    /// Scores the population and returns it best-first.
    ///
    /// Only unscored genotypes are sent to the fitness function unless
    /// `force_recalculate` is set. The new scores are cached.
    pub async fn rank_population(
        &mut self,
        force_recalculate: bool,
    ) -> Result<Vec<ScoredGenotype<P::Genotype>>, GaError> {
        let ranked =
            cache::rank(&self.problem, self.population.entries(), force_recalculate).await?;
        let mut scored = ranked.scored;
        self.population
            .replace(scored.iter().cloned().map(Entry::from).collect());
        sort_best_first(&self.problem, &mut scored);
        Ok(scored)
    }

    /// Best cached genotype and its fitness, per the problem's comparator.
    ///
    /// Ties go to the earlier member of the population.
    ///
    /// # Errors
    ///
    /// [`GaError::NoScoredGenotypes`] if nothing has been scored.
    pub fn best_genotype_with_fitness(&self) -> Result<ScoredGenotype<P::Genotype>, GaError> {
        self.population
            .scored()
            .map(|s| ScoredGenotype::new(s.genotype.clone(), s.fitness))
            .reduce(|best, candidate| {
                if dominance(&self.problem, &candidate, &best) == CmpOrdering::Less {
                    candidate
                } else {
                    best
                }
            })
            .ok_or(GaError::NoScoredGenotypes)
    }

    /// Best cached genotype.
    pub fn best_genotype(&self) -> Result<P::Genotype, GaError> {
        self.best_genotype_with_fitness().map(|s| s.genotype)
    }

    /// Fitness of the best cached genotype.
    pub fn best_fitness(&self) -> Result<f64, GaError> {
        self.best_genotype_with_fitness().map(|s| s.fitness)
    }

    /// Arithmetic mean of all cached fitness values.
    ///
    /// # Errors
    ///
    /// [`GaError::NoScoredGenotypes`] if nothing has been scored.
    pub fn mean_fitness(&self) -> Result<f64, GaError> {
        let (sum, count) = self
            .population
            .scored()
            .fold((0.0, 0usize), |(sum, count), s| (sum + s.fitness, count + 1));
        if count == 0 {
            return Err(GaError::NoScoredGenotypes);
        }
        Ok(sum / count as f64)
    }

    /// Snapshot of the population's genotypes.
    pub fn current_population(&self) -> Vec<P::Genotype> {
        self.population.genotypes()
    }

    /// Snapshot of the genotypes that hold a cached fitness.
    pub fn scored_population(&self) -> Vec<ScoredGenotype<P::Genotype>> {
        self.population
            .scored()
            .map(|s| ScoredGenotype::new(s.genotype.clone(), s.fitness))
            .collect()
    }

    /// Current population size.
    pub fn population_len(&self) -> usize {
        self.population.len()
    }

    /// Active configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The problem this engine optimizes.
    pub fn problem(&self) -> &P {
        &self.problem
    }
}

// ============================================================================
// Tests
// ============================================================================
