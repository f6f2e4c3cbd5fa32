#![doc = include_str!("../README.md")]

#[cfg(test)]
mod tests;

mod box_cox;
pub use box_cox::{box_cox, BoxCoxDiagnostic};

mod distribution;
pub use distribution::{
    Beta, DistributionVariant, Exponential, Gamma, LogNormal, Normal, Power, VariantFitTrait,
    VariantInfoTrait,
};

mod error;
pub use error::Error;

mod fit;
pub use fit::{fit, fit_all, DistributionFit, MIN_SAMPLE_LEN};

mod gof;
pub use gof::{
    anderson_darling_ksamp, ks_two_sample, metric_battery, shapiro_wilk, wasserstein_distance,
    MetricColumn, MetricSet, MetricValue, PairedStat, ShapiroWilk,
};

mod kde;
pub use kde::{coordinate_mse, curve_mse, density_mse, Kde, KdeCurve};

mod normality;
pub use normality::{check_normality, NormalityCandidate, NormalityCheck};

mod params;
pub use params::{Parameter, ParameterSet};

mod ranking;
pub use ranking::{combine, RankingRow, RankingTable, DISTRIBUTION_KEYS, NORMALITY_KEYS};

mod simplex;
pub use simplex::SimplexFit;

mod stats;

mod transform;
pub use transform::{
    ExponentialTransform, InverseTransform, LogTransform, OriginalTransform, RootTransform,
    SquareTransform, Transform, TransformEntry, TransformSet, TransformTrait,
};

pub use ndarray;
