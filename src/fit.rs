//! The fitting lifecycle: validate, copy, estimate, synthesize, score.

use crate::distribution::{DistributionVariant, VariantFitTrait, VariantInfoTrait};
use crate::error::Error;
use crate::gof::{metric_battery, MetricColumn, MetricSet};
use crate::kde::{Kde, KdeCurve};
use crate::params::ParameterSet;

use ndarray::Array1;
use rand::RngCore;
use serde::Serialize;
use std::fmt;

/// Shortest sample any distribution variant accepts.
pub const MIN_SAMPLE_LEN: usize = 10;

/// One fitted distribution: type tag, estimated parameters, goodness-of-fit
/// metrics, and the synthesized sample the metrics were computed against.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DistributionFit {
    name: &'static str,
    pub params: ParameterSet,
    pub metrics: MetricSet,
    synthesized: Array1<f64>,
}

impl DistributionFit {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn synthesized(&self) -> &Array1<f64> {
        &self.synthesized
    }

    /// KDE curve of the synthesized sample, for external plotting.
    pub fn kde_curve_synthesized(&self) -> Result<KdeCurve, Error> {
        Kde::default().curve(
            self.synthesized
                .as_slice()
                .expect("owned 1-d arrays are contiguous"),
        )
    }
}

impl fmt::Display for DistributionFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distribution : {}", self.name)?;
        writeln!(f, "Parameters : {}", self.params.format_brief())?;
        writeln!(f, "Results :")?;
        for column in MetricColumn::ALL {
            writeln!(f, "\t{} : {}", column.title(), self.metrics.get(column))?;
        }
        Ok(())
    }
}

/// Fit one distribution variant to `sample`.
///
/// Lifecycle: validate length, copy the data, estimate parameters,
/// synthesize a same-length sample with the injected generator, score with
/// the goodness-of-fit battery.
pub fn fit(
    variant: &DistributionVariant,
    sample: &[f64],
    rng: &mut dyn RngCore,
) -> Result<DistributionFit, Error> {
    if sample.is_empty() {
        return Err(Error::EmptySample);
    }
    if sample.len() < MIN_SAMPLE_LEN {
        return Err(Error::ShortSample {
            actual: sample.len(),
            minimum: MIN_SAMPLE_LEN,
        });
    }

    let data = sample.to_vec();
    let params = variant.estimate(&data)?;
    let synthesized = variant.synthesize(&params, data.len(), rng)?;
    let metrics = metric_battery(
        &data,
        synthesized
            .as_slice()
            .expect("owned 1-d arrays are contiguous"),
    )?;

    Ok(DistributionFit {
        name: variant.name(),
        params,
        metrics,
        synthesized,
    })
}

/// Fit every supported distribution variant to `sample`, in canonical order.
pub fn fit_all(sample: &[f64], rng: &mut dyn RngCore) -> Result<Vec<DistributionFit>, Error> {
    let mut fits = Vec::new();
    for variant in DistributionVariant::all() {
        fits.push(fit(&variant, sample, rng)?);
    }
    Ok(fits)
}
