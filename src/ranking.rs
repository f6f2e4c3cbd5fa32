//! Merging distribution fits into one ordered ranking table.

use crate::error::Error;
use crate::fit::DistributionFit;
use crate::gof::MetricColumn;

use serde::Serialize;
use std::cmp::Ordering;

/// Sort-key priority of the distribution-comparison table: density-shape
/// fidelity first, moment differences as tie-breakers only.
pub const DISTRIBUTION_KEYS: [MetricColumn; 5] = [
    MetricColumn::Mse,
    MetricColumn::MseScale,
    MetricColumn::MseCurve,
    MetricColumn::DeltaKurtosis,
    MetricColumn::DeltaSkewness,
];

/// Sort-key priority of the normality-workflow table: combined curve
/// distance first.
pub const NORMALITY_KEYS: [MetricColumn; 5] = [
    MetricColumn::MseCurve,
    MetricColumn::Mse,
    MetricColumn::MseScale,
    MetricColumn::DeltaKurtosis,
    MetricColumn::DeltaSkewness,
];

/// One table row: head label, formatted parameters, metric cells in column
/// order, rounded for display.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RankingRow {
    pub head: String,
    pub parameters: String,
    pub values: Vec<f64>,
}

/// Ordered ranking of distribution fits, ready for tabular export.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RankingTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<RankingRow>,
}

/// Total order over metric values: `NaN` sorts last at every key.
fn cmp_nan_last(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

fn round5(x: f64) -> f64 {
    (x * 1e5).round() / 1e5
}

fn metric_columns(keys: &[MetricColumn; 5]) -> Vec<MetricColumn> {
    let mut columns: Vec<MetricColumn> = keys.to_vec();
    columns.extend(
        MetricColumn::ALL
            .iter()
            .copied()
            .filter(|c| !keys.contains(c)),
    );
    columns
}

pub(crate) fn build_table(
    mut entries: Vec<(String, DistributionFit)>,
    keys: &[MetricColumn; 5],
) -> Result<RankingTable, Error> {
    if entries.is_empty() {
        return Err(Error::EmptyRanking);
    }

    // stable sort keeps re-sorting idempotent over tied keys
    entries.sort_by(|(_, a), (_, b)| {
        for &key in keys {
            let ord = cmp_nan_last(
                a.metrics.get(key).table_value(),
                b.metrics.get(key).table_value(),
            );
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });

    let columns_enum = metric_columns(keys);
    let mut columns = vec!["Distribution", "Parameters"];
    columns.extend(columns_enum.iter().map(|c| c.title()));

    let rows = entries
        .iter()
        .map(|(head, f)| RankingRow {
            head: head.clone(),
            parameters: f.params.format_brief(),
            values: columns_enum
                .iter()
                .map(|&c| round5(f.metrics.get(c).table_value()))
                .collect(),
        })
        .collect();

    Ok(RankingTable { columns, rows })
}

/// Merge distribution fits into one table sorted by the canonical key order.
///
/// Every fit must come from the same original sample; mixing samples across
/// one table is the caller's bug, not detectable here.
pub fn combine(fits: &[DistributionFit]) -> Result<RankingTable, Error> {
    build_table(
        fits.iter()
            .map(|f| (f.name().to_owned(), f.clone()))
            .collect(),
        &DISTRIBUTION_KEYS,
    )
}
