//! Helpers for implementing [`GaProblem::evaluate`](super::GaProblem::evaluate).
//!
//! Most fitness functions score each genotype independently. These helpers
//! turn such a per-genotype function into a batch result, optionally
//! spreading the work across threads with rayon (enable the `parallel`
//! feature).

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scores each genotype with `fitness`, preserving order.
///
/// With `parallel == true` and the `parallel` feature enabled, genotypes
/// are scored on the rayon thread pool. Without the feature the flag is
/// ignored and scoring is sequential.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::evaluate::evaluate_batch;
///
/// let scores = evaluate_batch(&[1.0, -2.0, 3.0], |x: &f64| -x * x, false);
/// assert_eq!(scores, vec![-1.0, -4.0, -9.0]);
/// ```
pub fn evaluate_batch<G, F>(genotypes: &[G], fitness: F, parallel: bool) -> Vec<f64>
where
    G: Sync,
    F: Fn(&G) -> f64 + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return genotypes.par_iter().map(&fitness).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    genotypes.iter().map(fitness).collect()
}
