//! Gaussian kernel density estimation and KDE-curve distance metrics.

use crate::error::Error;
use crate::stats;

use ndarray::{Array1, Zip};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A smoothed density estimate: equal-length x-grid and y-density arrays.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct KdeCurve {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
}

impl KdeCurve {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Gaussian kernel density estimator with automatic bandwidth selection.
///
/// The bandwidth follows Scott's rule, `h = n^(-1/5) · σ` with the sample
/// standard deviation; the evaluation grid spans the observed minimum and
/// maximum extended by `cut` bandwidths on each side. Deterministic for a
/// given sample.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Kde {
    pub grid_size: usize,
    pub cut: f64,
}

impl Kde {
    pub fn new(grid_size: usize, cut: f64) -> Self {
        assert!(grid_size >= 2, "grid_size must be at least 2");
        assert!(cut >= 0.0 && cut.is_finite(), "cut must be finite and non-negative");
        Self { grid_size, cut }
    }

    #[inline]
    pub fn default_grid_size() -> usize {
        200
    }

    #[inline]
    pub fn default_cut() -> f64 {
        3.0
    }

    /// Scott's-rule bandwidth; a unit bandwidth stands in when the sample
    /// standard deviation is degenerate (constant sample).
    pub fn bandwidth(sample: &[f64]) -> f64 {
        let sd = stats::std_dev(sample);
        if !sd.is_finite() || sd < f64::EPSILON {
            return 1.0;
        }
        (sample.len() as f64).powf(-0.2) * sd
    }

    /// Estimate the density curve of `sample`.
    pub fn curve(&self, sample: &[f64]) -> Result<KdeCurve, Error> {
        if sample.is_empty() {
            return Err(Error::EmptySample);
        }

        let h = Self::bandwidth(sample);
        let (min, max) = sample.iter().fold((sample[0], sample[0]), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
        let x = Array1::linspace(min - self.cut * h, max + self.cut * h, self.grid_size);

        let norm = 1.0 / (sample.len() as f64 * h * (2.0 * std::f64::consts::PI).sqrt());
        let y = x.mapv(|xj| {
            sample
                .iter()
                .map(|&xi| {
                    let z = (xj - xi) / h;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm
        });

        Ok(KdeCurve { x, y })
    }
}

impl Default for Kde {
    fn default() -> Self {
        Self::new(Self::default_grid_size(), Self::default_cut())
    }
}

fn check_cardinality(a: &KdeCurve, b: &KdeCurve) -> Result<(), Error> {
    if a.len() != b.len() {
        return Err(Error::GridMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Mean squared difference between the two y-density sequences.
pub fn density_mse(a: &KdeCurve, b: &KdeCurve) -> Result<f64, Error> {
    check_cardinality(a, b)?;
    let sum = Zip::from(&a.y)
        .and(&b.y)
        .fold(0.0, |acc, &ya, &yb| acc + (ya - yb).powi(2));
    Ok(sum / a.len() as f64)
}

/// Mean squared difference between the two x-grid sequences; compares scale
/// and location through the estimators' automatic range selection.
pub fn coordinate_mse(a: &KdeCurve, b: &KdeCurve) -> Result<f64, Error> {
    check_cardinality(a, b)?;
    let sum = Zip::from(&a.x)
        .and(&b.x)
        .fold(0.0, |acc, &xa, &xb| acc + (xa - xb).powi(2));
    Ok(sum / a.len() as f64)
}

/// Mean squared Euclidean distance between corresponding (x, y) points.
pub fn curve_mse(a: &KdeCurve, b: &KdeCurve) -> Result<f64, Error> {
    check_cardinality(a, b)?;
    let sum = Zip::from(&a.x)
        .and(&a.y)
        .and(&b.x)
        .and(&b.y)
        .fold(0.0, |acc, &xa, &ya, &xb, &yb| {
            acc + (xa - xb).powi(2) + (ya - yb).powi(2)
        });
    Ok(sum / a.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn curve_has_requested_cardinality() {
        let sample: Vec<f64> = (0..50).map(|i| i as f64 / 10.0).collect();
        let curve = Kde::default().curve(&sample).unwrap();
        assert_eq!(curve.len(), Kde::default_grid_size());
        assert_eq!(curve.x.len(), curve.y.len());
    }

    #[test]
    fn curve_of_empty_sample_fails() {
        assert_eq!(Kde::default().curve(&[]), Err(Error::EmptySample));
    }

    #[test]
    fn density_integrates_to_about_one() {
        let mut rng = seeded_rng(7);
        let sample = normal_sample(&mut rng, 0.0, 1.0, 500);
        let curve = Kde::default().curve(&sample).unwrap();
        let dx = curve.x[1] - curve.x[0];
        let integral: f64 = curve.y.iter().sum::<f64>() * dx;
        assert_abs_diff_eq!(integral, 1.0, epsilon = 0.02);
    }

    #[test]
    fn curve_is_deterministic() {
        let sample: Vec<f64> = (0..100).map(|i| (i as f64).sin()).collect();
        let a = Kde::default().curve(&sample).unwrap();
        let b = Kde::default().curve(&sample).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn constant_sample_gets_fallback_bandwidth() {
        assert_abs_diff_eq!(Kde::bandwidth(&[2.0; 30]), 1.0, epsilon = 1e-12);
        let curve = Kde::default().curve(&[2.0; 30]).unwrap();
        assert!(curve.y.iter().all(|y| y.is_finite()));
    }

    #[test]
    fn density_mse_is_symmetric() {
        let mut rng = seeded_rng(11);
        let a = Kde::default()
            .curve(&normal_sample(&mut rng, 0.0, 1.0, 100))
            .unwrap();
        let b = Kde::default()
            .curve(&normal_sample(&mut rng, 0.5, 2.0, 100))
            .unwrap();
        assert_abs_diff_eq!(
            density_mse(&a, &b).unwrap(),
            density_mse(&b, &a).unwrap(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn metrics_vanish_on_identical_curves() {
        let sample: Vec<f64> = (0..64).map(|i| (i % 13) as f64).collect();
        let curve = Kde::default().curve(&sample).unwrap();
        assert_abs_diff_eq!(density_mse(&curve, &curve).unwrap(), 0.0);
        assert_abs_diff_eq!(coordinate_mse(&curve, &curve).unwrap(), 0.0);
        assert_abs_diff_eq!(curve_mse(&curve, &curve).unwrap(), 0.0);
    }

    #[test]
    fn mismatched_grids_fail() {
        let sample: Vec<f64> = (0..20).map(f64::from).collect();
        let a = Kde::default().curve(&sample).unwrap();
        let b = Kde::new(100, 3.0).curve(&sample).unwrap();
        assert_eq!(
            density_mse(&a, &b),
            Err(Error::GridMismatch {
                left: 200,
                right: 100
            })
        );
    }

    #[test]
    fn curve_mse_dominates_density_mse() {
        // curve_mse adds the x-displacement term on top of the y term
        let mut rng = seeded_rng(3);
        let a = Kde::default()
            .curve(&normal_sample(&mut rng, 0.0, 1.0, 200))
            .unwrap();
        let b = Kde::default()
            .curve(&normal_sample(&mut rng, 5.0, 1.0, 200))
            .unwrap();
        let dm = density_mse(&a, &b).unwrap();
        let cm = curve_mse(&a, &b).unwrap();
        assert!(cm >= dm);
    }
}
