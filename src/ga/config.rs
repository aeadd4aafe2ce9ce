//! Engine configuration.
//!
//! [`GaConfig`] holds the parameters that shape one generation step.

use super::error::GaError;

/// How many top-ranked genotypes skip competition each generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Elitism {
    /// A fraction of the population (0.0–1.0), rounded down.
    Ratio(f64),

    /// A fixed number of genotypes.
    Count(usize),
}

impl Default for Elitism {
    fn default() -> Self {
        Elitism::Ratio(0.1)
    }
}

impl Elitism {
    /// Resolves to a concrete elite count for a population size.
    pub fn elite_count(&self, population_size: usize) -> usize {
        match *self {
            Elitism::Ratio(ratio) => (population_size as f64 * ratio) as usize,
            Elitism::Count(n) => n,
        }
    }
}

/// Configuration for [`GaEngine`](super::GaEngine).
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::{Elitism, GaConfig};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.elitism, Elitism::Ratio(0.1));
/// assert!(!config.recalculate_fitness);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_crossover_probability(0.2)
///     .with_elite_count(4)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Target number of genotypes after each generation. Must be at least 2.
    pub population_size: usize,

    /// Probability that a replacement slot is filled by crossover rather
    /// than mutation (0.0–1.0).
    ///
    /// Ignored when the problem has no crossover operator.
    pub crossover_probability: f64,

    /// Top genotypes copied through unchanged each generation.
    pub elitism: Elitism,

    /// Re-evaluate every genotype each generation, ignoring cached scores.
    ///
    /// Use this for fitness functions whose output drifts over time.
    pub recalculate_fitness: bool,

    /// Random seed for reproducibility.
    ///
    /// Read once when the engine is built; `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            crossover_probability: 0.5,
            elitism: Elitism::default(),
            recalculate_fitness: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the target population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets elitism as a fraction of the population.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elitism = Elitism::Ratio(ratio.clamp(0.0, 1.0));
        self
    }

    /// Sets elitism as a fixed count.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elitism = Elitism::Count(n);
        self
    }

    /// Forces (or stops forcing) full fitness re-evaluation each generation.
    pub fn with_recalculate_fitness(mut self, recalculate: bool) -> Self {
        self.recalculate_fitness = recalculate;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of genotypes exempt from competition.
    pub fn elite_count(&self) -> usize {
        self.elitism.elite_count(self.population_size)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(invalid("crossover_probability must be within 0.0..=1.0"));
        }
        if let Elitism::Ratio(ratio) = self.elitism {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(invalid("elitism ratio must be within 0.0..=1.0"));
            }
        }
        if self.elite_count() >= self.population_size {
            return Err(invalid("elitism too high: elites fill entire population"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> GaError {
    GaError::InvalidConfig(reason.into())
}
