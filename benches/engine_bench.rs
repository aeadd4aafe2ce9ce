//! Criterion benchmarks for the evolution engine.
//!
//! Uses a synthetic problem (Sphere function) so the numbers reflect
//! engine overhead: caching, sorting, pairing and breeding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_evolve::ga::evaluate::evaluate_batch;
use u_evolve::ga::{BoxError, GaConfig, GaEngine, GaProblem};

// ===========================================================================
// Sphere function: maximize -sum(x_i^2)
// ===========================================================================

struct SphereProblem {
    dim: usize,
}

impl GaProblem for SphereProblem {
    type Genotype = Vec<f64>;

    async fn evaluate(&self, genotypes: Vec<Vec<f64>>) -> Result<Vec<f64>, BoxError> {
        Ok(evaluate_batch(
            &genotypes,
            |genes: &Vec<f64>| -genes.iter().map(|x| x * x).sum::<f64>(),
            false,
        ))
    }

    fn crossover<R: Rng>(
        &self,
        p1: &Vec<f64>,
        p2: &Vec<f64>,
        rng: &mut R,
    ) -> Result<Option<Vec<f64>>, BoxError> {
        let point = rng.random_range(0..self.dim);
        let mut child = p1.clone();
        child[point..].copy_from_slice(&p2[point..]);
        Ok(Some(child))
    }

    fn mutate<R: Rng>(&self, parent: &Vec<f64>, rng: &mut R) -> Result<Vec<f64>, BoxError> {
        let mut child = parent.clone();
        let i = rng.random_range(0..self.dim);
        child[i] += rng.random_range(-0.5..0.5);
        Ok(child)
    }
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("tokio runtime")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_sphere_generations(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere_generations");
    group.sample_size(10);
    let rt = runtime();

    for (dim, pop, gen) in [(10usize, 50usize, 50usize), (50, 100, 30), (100, 100, 20)] {
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("d{}_p{}_g{}", dim, pop, gen), dim),
            &config,
            |b, config| {
                b.iter(|| {
                    let initial = vec![vec![5.0; dim]];
                    let mut engine =
                        GaEngine::new(SphereProblem { dim }, config.clone(), initial)
                            .expect("valid config");
                    let summary = rt.block_on(engine.evolve(black_box(gen)));
                    black_box(summary)
                })
            },
        );
    }
    group.finish();
}

fn bench_cached_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_rank");
    let rt = runtime();

    for &pop in &[100usize, 1000] {
        let config = GaConfig::default().with_population_size(pop).with_seed(7);
        let initial: Vec<Vec<f64>> = (0..pop).map(|i| vec![i as f64; 10]).collect();
        let mut engine =
            GaEngine::new(SphereProblem { dim: 10 }, config, initial).expect("valid config");
        rt.block_on(engine.rank_population(false))
            .expect("initial scoring");

        group.bench_with_input(BenchmarkId::from_parameter(pop), &pop, |b, _| {
            b.iter(|| black_box(rt.block_on(engine.rank_population(false))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sphere_generations, bench_cached_rank);
criterion_main!(benches);
