//! Shared helpers for the crate's test suites.

pub use rand::prelude::*;

use rand_distr::Distribution;

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn normal_sample(rng: &mut StdRng, mu: f64, sigma: f64, n: usize) -> Vec<f64> {
    let dist = rand_distr::Normal::new(mu, sigma).unwrap();
    (0..n).map(|_| dist.sample(rng)).collect()
}

pub fn exponential_sample(rng: &mut StdRng, scale: f64, n: usize) -> Vec<f64> {
    let dist = rand_distr::Exp::new(1.0 / scale).unwrap();
    (0..n).map(|_| dist.sample(rng)).collect()
}

pub fn all_close(actual: &[f64], desired: &[f64], tol: f64) {
    assert_eq!(
        actual.len(),
        desired.len(),
        "lengths differ: {} vs {}",
        actual.len(),
        desired.len()
    );
    for (i, (&a, &d)) in actual.iter().zip(desired.iter()).enumerate() {
        assert!(
            (a - d).abs() <= tol || (a.is_nan() && d.is_nan()),
            "values differ at index {i}: {a} vs {d}"
        );
    }
}
