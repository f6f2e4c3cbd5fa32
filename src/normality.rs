//! Normality workflow: which shape transform best normalizes a sample?

use crate::distribution::{DistributionVariant, Normal};
use crate::error::Error;
use crate::fit::{fit, DistributionFit};
use crate::ranking::{build_table, RankingTable, NORMALITY_KEYS};
use crate::stats;
use crate::transform::{TransformSet, TransformTrait};

use ndarray::Array1;
use rand::RngCore;
use serde::Serialize;

/// A transform whose standard deviation differs from the original's by
/// more than this many orders of magnitude counts as numerically
/// degenerate.
const STD_DEGENERACY_RATIO: f64 = 1e-6;

/// One surviving transform with its Normal fit.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NormalityCandidate {
    pub name: &'static str,
    pub data: Array1<f64>,
    pub fit: DistributionFit,
}

/// Outcome of the normality workflow: the surviving transforms and the
/// ranking table keyed by curve distance.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NormalityCheck {
    pub candidates: Vec<NormalityCandidate>,
    pub table: RankingTable,
}

/// Fit the Normal variant to every valid transform of the set and rank the
/// transforms by how close to normal they made the sample.
///
/// A transform is discarded when it was invalid for the input, produced any
/// non-finite value, or its standard deviation is off by more than six
/// orders of magnitude relative to the original's (numerically degenerate
/// spread). Fails when nothing survives the filters.
pub fn check_normality(
    set: &TransformSet,
    rng: &mut dyn RngCore,
) -> Result<NormalityCheck, Error> {
    let original = set.get("Original").ok_or(Error::NoValidTransform)?;
    let original_std = stats::population_std(
        original
            .as_slice()
            .expect("owned 1-d arrays are contiguous"),
    );

    let normal = DistributionVariant::from(Normal::new());
    let mut candidates = Vec::new();
    for entry in set.entries() {
        let Some(data) = &entry.data else { continue };
        let slice = data.as_slice().expect("owned 1-d arrays are contiguous");
        if !slice.iter().all(|v| v.is_finite()) {
            continue;
        }
        if original_std / stats::population_std(slice) < STD_DEGENERACY_RATIO {
            continue;
        }
        candidates.push(NormalityCandidate {
            name: entry.transform.name(),
            data: data.clone(),
            fit: fit(&normal, slice, rng)?,
        });
    }
    if candidates.is_empty() {
        return Err(Error::NoValidTransform);
    }

    let table = build_table(
        candidates
            .iter()
            .map(|c| (c.name.to_owned(), c.fit.clone()))
            .collect(),
        &NORMALITY_KEYS,
    )?;

    Ok(NormalityCheck { candidates, table })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    #[test]
    fn ranks_surviving_transforms_of_a_positive_sample() {
        let mut rng = seeded_rng(90);
        let sample: Vec<f64> = normal_sample(&mut rng, 50.0, 3.0, 300)
            .into_iter()
            .map(f64::abs)
            .collect();
        let set = TransformSet::candidates(&sample).unwrap();
        let check = check_normality(&set, &mut rng).unwrap();
        assert!(!check.candidates.is_empty());
        assert_eq!(check.table.rows.len(), check.candidates.len());
        // normality tables are keyed by curve distance first
        assert_eq!(check.table.columns[2], "MSE Curve");
    }

    #[test]
    fn invalid_transforms_are_excluded_from_the_table() {
        let mut rng = seeded_rng(91);
        // negative values invalidate Log and Root, a zero is absent so
        // Inverse stays
        let mut sample = normal_sample(&mut rng, 0.0, 1.0, 200);
        sample[0] = -5.0;
        let set = TransformSet::candidates(&sample).unwrap();
        let check = check_normality(&set, &mut rng).unwrap();
        let heads: Vec<&str> = check.table.rows.iter().map(|r| r.head.as_str()).collect();
        assert!(!heads.contains(&"Log"));
        assert!(!heads.contains(&"Root"));
        assert!(heads.contains(&"Original"));
    }

    #[test]
    fn exponential_overflow_is_filtered_as_non_finite_or_invalid() {
        let mut rng = seeded_rng(92);
        // values near 700 keep Exponential "valid" (below the guard) but
        // its spread explodes; the workflow must still terminate and rank
        // the remaining transforms
        let sample: Vec<f64> = normal_sample(&mut rng, 700.0, 2.0, 100)
            .into_iter()
            .map(f64::abs)
            .collect();
        let set = TransformSet::candidates(&sample).unwrap();
        let check = check_normality(&set, &mut rng).unwrap();
        assert!(check.table.rows.iter().any(|r| r.head == "Original"));
    }

    #[test]
    fn short_sample_propagates_fit_validation() {
        let sample = [1.0, 2.0, 3.0];
        let set = TransformSet::candidates(&sample).unwrap();
        let mut rng = seeded_rng(93);
        assert!(matches!(
            check_normality(&set, &mut rng),
            Err(Error::ShortSample { .. })
        ));
    }

    #[test]
    fn normality_ranking_is_deterministic_under_a_fixed_seed() {
        let sample: Vec<f64> = {
            let mut rng = seeded_rng(94);
            normal_sample(&mut rng, 10.0, 1.0, 200)
                .into_iter()
                .map(f64::abs)
                .collect()
        };
        let set = TransformSet::candidates(&sample).unwrap();
        let a = check_normality(&set, &mut seeded_rng(95)).unwrap();
        let b = check_normality(&set, &mut seeded_rng(95)).unwrap();
        assert_eq!(a.table, b.table);
    }
}
