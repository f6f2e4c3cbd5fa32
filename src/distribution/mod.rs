//! Distribution variants: the capability set {estimate, synthesize, cost}
//! with one concrete implementation per supported family.

pub(crate) use crate::error::Error;
pub(crate) use crate::params::ParameterSet;
pub(crate) use crate::simplex::SimplexFit;

pub(crate) use macro_const::macro_const;
pub(crate) use ndarray::Array1;
pub(crate) use rand::RngCore;
pub(crate) use rand_distr::Distribution;
pub(crate) use schemars::JsonSchema;
pub(crate) use serde::{Deserialize, Serialize};

use enum_dispatch::enum_dispatch;

mod beta;
pub use beta::Beta;

mod exponential;
pub use exponential::Exponential;

mod gamma;
pub use gamma::Gamma;

mod log_normal;
pub use log_normal::LogNormal;

mod normal;
pub use normal::Normal;

mod power;
pub use power::Power;

/// Static description of a distribution variant.
#[enum_dispatch]
pub trait VariantInfoTrait {
    /// Type tag used in ranking tables and reports.
    fn name(&self) -> &'static str;

    /// Names of the parameters `estimate` produces, in definition order.
    fn param_names(&self) -> &'static [&'static str];
}

/// The fitting capability set of a distribution variant.
#[enum_dispatch]
pub trait VariantFitTrait: VariantInfoTrait {
    /// Estimate the variant's parameters from `sample`.
    fn estimate(&self, sample: &[f64]) -> Result<ParameterSet, Error>;

    /// Draw a sample of length `n` from the fitted distribution.
    fn synthesize(
        &self,
        params: &ParameterSet,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Array1<f64>, Error>;

    /// Negative log-likelihood of `sample` under the given parameter
    /// vector; infinite outside the parameter domain.
    fn cost(&self, params: &[f64], sample: &[f64]) -> f64;
}

/// All supported distribution variants as a single tagged union
///
/// Consider to import [crate::VariantFitTrait] as well
#[enum_dispatch(VariantFitTrait, VariantInfoTrait)]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[non_exhaustive]
pub enum DistributionVariant {
    Normal,
    LogNormal,
    Exponential,
    Power,
    Beta,
    Gamma,
}

impl DistributionVariant {
    /// The six variants in canonical fitting order.
    pub fn all() -> Vec<Self> {
        vec![
            Normal::default().into(),
            LogNormal::default().into(),
            Exponential::default().into(),
            Power::default().into(),
            Beta::default().into(),
            Gamma::default().into(),
        ]
    }
}
