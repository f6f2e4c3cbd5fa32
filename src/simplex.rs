//! Derivative-free simplex minimization used for maximum-likelihood
//! parameter estimation.

use crate::error::Error;

use argmin::core::{CostFunction, Executor, State};
use argmin::solver::neldermead::NelderMead;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

struct CostAdapter<F> {
    f: F,
}

impl<F> CostFunction for CostAdapter<F>
where
    F: Fn(&[f64]) -> f64,
{
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, p: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        Ok((self.f)(p))
    }
}

/// Nelder-Mead simplex search settings.
///
/// The search has no explicit parameter bounds; cost functions are expected
/// to return an infinite value outside their own domain. Termination is
/// governed by the standard-deviation tolerance over the simplex vertices'
/// cost values and by `max_iters`.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SimplexFit {
    pub max_iters: u64,
    pub sd_tolerance: f64,
    pub step: f64,
}

impl SimplexFit {
    /// Create new [SimplexFit] settings.
    ///
    /// # Arguments
    /// - `max_iters`: iteration budget of the search
    /// - `sd_tolerance`: termination tolerance on the standard deviation of
    ///   the vertex cost values
    /// - `step`: displacement applied per coordinate when building the
    ///   initial simplex around the initial guess
    pub fn new(max_iters: u64, sd_tolerance: f64, step: f64) -> Self {
        assert!(max_iters > 0, "max_iters must be positive");
        assert!(
            sd_tolerance >= 0.0 && sd_tolerance.is_finite(),
            "sd_tolerance must be finite and non-negative"
        );
        assert!(
            step > 0.0 && step.is_finite(),
            "step must be finite and positive"
        );
        Self {
            max_iters,
            sd_tolerance,
            step,
        }
    }

    #[inline]
    pub fn default_max_iters() -> u64 {
        500
    }

    #[inline]
    pub fn default_sd_tolerance() -> f64 {
        1e-8
    }

    #[inline]
    pub fn default_step() -> f64 {
        0.05
    }

    fn initial_simplex(&self, init: &[f64]) -> Vec<Vec<f64>> {
        let mut vertices = Vec::with_capacity(init.len() + 1);
        vertices.push(init.to_vec());
        for i in 0..init.len() {
            let mut v = init.to_vec();
            v[i] += self.step;
            vertices.push(v);
        }
        vertices
    }

    /// Minimize `cost` starting from `init`, returning the best parameter
    /// vector found.
    pub fn minimize(&self, cost: impl Fn(&[f64]) -> f64, init: &[f64]) -> Result<Vec<f64>, Error> {
        let solver: NelderMead<Vec<f64>, f64> = NelderMead::new(self.initial_simplex(init))
            .with_sd_tolerance(self.sd_tolerance)
            .map_err(|e| Error::Optimizer(e.to_string()))?;
        let res = Executor::new(CostAdapter { f: cost }, solver)
            .configure(|state| state.max_iters(self.max_iters))
            .run()
            .map_err(|e| Error::Optimizer(e.to_string()))?;
        // A cost surface that is infinite everywhere never improves on the
        // initial guess; report the guess itself then.
        Ok(res
            .state()
            .get_best_param()
            .cloned()
            .unwrap_or_else(|| init.to_vec()))
    }
}

impl Default for SimplexFit {
    fn default() -> Self {
        Self::new(
            Self::default_max_iters(),
            Self::default_sd_tolerance(),
            Self::default_step(),
        )
    }
}
