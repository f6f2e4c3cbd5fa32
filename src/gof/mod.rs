//! Goodness-of-fit battery comparing an observed sample against a sample
//! synthesized from a fitted distribution.

use crate::error::Error;
use crate::kde::{coordinate_mse, curve_mse, density_mse, Kde};
use crate::stats;

use itertools::Itertools;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::fmt;

mod anderson;
pub use anderson::anderson_darling_ksamp;

mod ks;
pub use ks::ks_two_sample;

mod shapiro;
pub use shapiro::{shapiro_wilk, ShapiroWilk};

/// A test outcome: statistic plus p-value or significance level.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct PairedStat {
    pub statistic: f64,
    pub significance: f64,
}

/// A single battery entry: plain scalar, or a (statistic, significance)
/// pair for the hypothesis tests.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub enum MetricValue {
    Scalar(f64),
    Paired(PairedStat),
}

impl MetricValue {
    /// The number a ranking-table cell shows: the value itself for scalars,
    /// the significance field for paired statistics.
    pub fn table_value(&self) -> f64 {
        match self {
            MetricValue::Scalar(v) => *v,
            MetricValue::Paired(p) => p.significance,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Scalar(v) => write!(f, "{v}"),
            MetricValue::Paired(p) => write!(f, "(S: {}, P: {})", p.statistic, p.significance),
        }
    }
}

/// The battery's columns, in canonical table order.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub enum MetricColumn {
    Mse,
    MseScale,
    MseCurve,
    DeltaKurtosis,
    DeltaSkewness,
    KolmogorovSmirnov,
    ShapiroWilk,
    Wasserstein,
    PearsonValues,
    PearsonKde,
    AndersonValues,
    AndersonKde,
}

impl MetricColumn {
    pub const ALL: [Self; 12] = [
        Self::Mse,
        Self::MseScale,
        Self::MseCurve,
        Self::DeltaKurtosis,
        Self::DeltaSkewness,
        Self::KolmogorovSmirnov,
        Self::ShapiroWilk,
        Self::Wasserstein,
        Self::PearsonValues,
        Self::PearsonKde,
        Self::AndersonValues,
        Self::AndersonKde,
    ];

    /// Column title as rendered in exported tables.
    pub fn title(self) -> &'static str {
        match self {
            Self::Mse => "MSE",
            Self::MseScale => "MSE Scale",
            Self::MseCurve => "MSE Curve",
            Self::DeltaKurtosis => "Delta Kurtosis",
            Self::DeltaSkewness => "Delta Skewness",
            Self::KolmogorovSmirnov => "Kolmogorov-Smirnov Test",
            Self::ShapiroWilk => "Shapiro-Wilk Test",
            Self::Wasserstein => "Wasserstein Distance",
            Self::PearsonValues => "Pearson Correlation Test on values",
            Self::PearsonKde => "Pearson Correlation Test on KDE",
            Self::AndersonValues => "Anderson-Darling Test on values",
            Self::AndersonKde => "Anderson-Darling Test on KDE",
        }
    }
}

/// All goodness-of-fit metrics of one distribution fit. Computed once,
/// immutable afterwards. Degenerate metric values are `NaN`, never errors.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct MetricSet {
    pub mse: f64,
    pub mse_scale: f64,
    pub mse_curve: f64,
    pub delta_kurtosis: f64,
    pub delta_skewness: f64,
    pub kolmogorov_smirnov: PairedStat,
    pub shapiro_wilk: PairedStat,
    pub wasserstein: f64,
    pub pearson_values: PairedStat,
    pub pearson_kde: PairedStat,
    pub anderson_values: PairedStat,
    pub anderson_kde: PairedStat,
}

impl MetricSet {
    pub fn get(&self, column: MetricColumn) -> MetricValue {
        match column {
            MetricColumn::Mse => MetricValue::Scalar(self.mse),
            MetricColumn::MseScale => MetricValue::Scalar(self.mse_scale),
            MetricColumn::MseCurve => MetricValue::Scalar(self.mse_curve),
            MetricColumn::DeltaKurtosis => MetricValue::Scalar(self.delta_kurtosis),
            MetricColumn::DeltaSkewness => MetricValue::Scalar(self.delta_skewness),
            MetricColumn::KolmogorovSmirnov => MetricValue::Paired(self.kolmogorov_smirnov),
            MetricColumn::ShapiroWilk => MetricValue::Paired(self.shapiro_wilk),
            MetricColumn::Wasserstein => MetricValue::Scalar(self.wasserstein),
            MetricColumn::PearsonValues => MetricValue::Paired(self.pearson_values),
            MetricColumn::PearsonKde => MetricValue::Paired(self.pearson_kde),
            MetricColumn::AndersonValues => MetricValue::Paired(self.anderson_values),
            MetricColumn::AndersonKde => MetricValue::Paired(self.anderson_kde),
        }
    }
}

/// Wasserstein-1 distance between two equally long value sequences treated
/// as empirical distributions.
pub fn wasserstein_distance(u: &[f64], v: &[f64]) -> Result<f64, Error> {
    if u.is_empty() || v.is_empty() {
        return Err(Error::EmptySample);
    }
    if u.len() != v.len() {
        return Err(Error::LengthMismatch {
            left: u.len(),
            right: v.len(),
        });
    }
    let su: Vec<f64> = u.iter().copied().sorted_by(f64::total_cmp).collect();
    let sv: Vec<f64> = v.iter().copied().sorted_by(f64::total_cmp).collect();
    Ok(su
        .iter()
        .zip(sv.iter())
        .map(|(&a, &b)| (a - b).abs())
        .sum::<f64>()
        / u.len() as f64)
}

/// Pearson correlation with its two-sided Student-t p-value.
fn pearson_test(x: &[f64], y: &[f64]) -> PairedStat {
    let r = stats::pearson_r(x, y);
    let df = x.len() as f64 - 2.0;
    let significance = if !r.is_finite() || df <= 0.0 {
        f64::NAN
    } else if 1.0 - r * r <= 0.0 {
        0.0
    } else {
        let t = r * (df / (1.0 - r * r)).sqrt();
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => 2.0 * (1.0 - dist.cdf(t.abs())),
            Err(_) => f64::NAN,
        }
    };
    PairedStat {
        statistic: r,
        significance,
    }
}

fn round3(x: f64) -> f64 {
    (x * 1e3).round() / 1e3
}

/// Compute the full metric battery for an original sample and the sample
/// synthesized from its fitted distribution.
pub fn metric_battery(original: &[f64], synthesized: &[f64]) -> Result<MetricSet, Error> {
    if original.is_empty() || synthesized.is_empty() {
        return Err(Error::EmptySample);
    }
    if original.len() != synthesized.len() {
        return Err(Error::LengthMismatch {
            left: original.len(),
            right: synthesized.len(),
        });
    }

    let kde = Kde::default();
    let curve = kde.curve(original)?;
    let curve_syn = kde.curve(synthesized)?;
    let y = curve.y.as_slice().expect("owned 1-d arrays are contiguous");
    let y_syn = curve_syn
        .y
        .as_slice()
        .expect("owned 1-d arrays are contiguous");

    let ks = ks_two_sample(original, synthesized);
    let shapiro = match (shapiro_wilk(original), shapiro_wilk(synthesized)) {
        (Some(a), Some(b)) => PairedStat {
            statistic: (a.statistic - b.statistic).abs(),
            significance: (a.p_value - b.p_value).abs(),
        },
        _ => PairedStat {
            statistic: f64::NAN,
            significance: f64::NAN,
        },
    };

    Ok(MetricSet {
        mse: density_mse(&curve, &curve_syn)?,
        mse_scale: coordinate_mse(&curve, &curve_syn)?,
        mse_curve: curve_mse(&curve, &curve_syn)?,
        delta_kurtosis: (stats::kurtosis(original) - stats::kurtosis(synthesized)).abs(),
        delta_skewness: (stats::skewness(original) - stats::skewness(synthesized)).abs(),
        kolmogorov_smirnov: PairedStat {
            statistic: round3(ks.statistic),
            significance: round3(ks.significance),
        },
        shapiro_wilk: shapiro,
        wasserstein: wasserstein_distance(y, y_syn)?,
        pearson_values: pearson_test(original, synthesized),
        pearson_kde: pearson_test(y, y_syn),
        anderson_values: anderson_darling_ksamp(original, synthesized),
        anderson_kde: anderson_darling_ksamp(y, y_syn),
    })
}
