//! Box-Cox power-transform diagnostic.

use crate::error::Error;
use crate::stats;

use argmin::core::{CostFunction, Executor, State};
use argmin::solver::brent::BrentOpt;
use ndarray::Array1;
use serde::Serialize;

/// Result of the Box-Cox diagnostic on an applicable sample.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct BoxCoxDiagnostic {
    pub transformed: Array1<f64>,
    pub lambda: f64,
    pub mu: f64,
    pub sigma: f64,
}

fn apply(sample: &[f64], lambda: f64) -> Array1<f64> {
    if lambda == 0.0 {
        sample.iter().map(|&x| x.ln()).collect()
    } else {
        sample
            .iter()
            .map(|&x| (x.powf(lambda) - 1.0) / lambda)
            .collect()
    }
}

struct NegLogLikelihood<'a> {
    sample: &'a [f64],
    sum_log: f64,
}

impl CostFunction for NegLogLikelihood<'_> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, lambda: &f64) -> Result<f64, argmin::core::Error> {
        let y = apply(self.sample, *lambda);
        let m = y.mean().unwrap_or(f64::NAN);
        let var = y.fold(0.0, |acc, &v| acc + (v - m).powi(2)) / y.len() as f64;
        if !(var > 0.0) || !var.is_finite() {
            return Ok(f64::INFINITY);
        }
        let n = self.sample.len() as f64;
        Ok(-((*lambda - 1.0) * self.sum_log - n / 2.0 * var.ln()))
    }
}

/// Box-Cox power transform with the exponent λ chosen by maximizing the
/// transform's log-likelihood over [-5, 5] with Brent's method.
///
/// Returns `Ok(None)` ("not applicable") when the sample is constant or
/// contains a non-positive value; errors only on an empty sample.
pub fn box_cox(sample: &[f64]) -> Result<Option<BoxCoxDiagnostic>, Error> {
    if sample.is_empty() {
        return Err(Error::EmptySample);
    }
    if sample.iter().any(|&x| x <= 0.0) || sample.iter().all(|&x| x == sample[0]) {
        return Ok(None);
    }

    let sum_log = sample.iter().map(|&x| x.ln()).sum();
    let solver = BrentOpt::new(-5.0, 5.0);
    let res = Executor::new(NegLogLikelihood { sample, sum_log }, solver)
        .configure(|state| state.max_iters(100))
        .run()
        .map_err(|e| Error::Optimizer(e.to_string()))?;
    let lambda = res
        .state()
        .get_best_param()
        .copied()
        .ok_or_else(|| Error::Optimizer("Box-Cox search returned no exponent".into()))?;

    let transformed = apply(sample, lambda);
    let slice = transformed
        .as_slice()
        .expect("owned 1-d arrays are contiguous");
    let mu = stats::mean(slice);
    let sigma = stats::population_std(slice);

    Ok(Some(BoxCoxDiagnostic {
        transformed,
        lambda,
        mu,
        sigma,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    #[test]
    fn empty_sample_fails() {
        assert!(matches!(box_cox(&[]), Err(Error::EmptySample)));
    }

    #[test]
    fn negative_value_is_not_applicable() {
        let sample = [1.0, 2.0, -3.0, 4.0];
        assert_eq!(box_cox(&sample).unwrap(), None);
    }

    #[test]
    fn zero_value_is_not_applicable() {
        let sample = [1.0, 0.0, 2.0];
        assert_eq!(box_cox(&sample).unwrap(), None);
    }

    #[test]
    fn constant_sample_is_not_applicable() {
        assert_eq!(box_cox(&[4.2; 25]).unwrap(), None);
    }

    #[test]
    fn positive_sample_yields_finite_result() {
        let mut rng = seeded_rng(80);
        let sample: Vec<f64> = normal_sample(&mut rng, 20.0, 2.0, 500)
            .into_iter()
            .map(f64::abs)
            .collect();
        let diag = box_cox(&sample).unwrap().unwrap();
        assert!(diag.lambda.is_finite());
        assert!(diag.mu.is_finite());
        assert!(diag.sigma.is_finite());
        assert_eq!(diag.transformed.len(), sample.len());
    }

    #[test]
    fn log_normal_data_prefers_log_like_exponent() {
        use rand_distr::Distribution;
        let mut rng = seeded_rng(81);
        let dist = rand_distr::LogNormal::new(1.0, 0.5).unwrap();
        let sample: Vec<f64> = (0..1000).map(|_| dist.sample(&mut rng)).collect();
        let diag = box_cox(&sample).unwrap().unwrap();
        // the log transform normalizes log-normal data, so λ should land near 0
        assert!(diag.lambda.abs() < 0.3, "lambda = {}", diag.lambda);
    }
}
