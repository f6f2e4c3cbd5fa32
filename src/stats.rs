//! Slice-level moment statistics shared across the crate.
//!
//! All functions return `NaN` on degenerate input (empty slice, zero
//! variance) instead of erroring; callers that must reject empty samples
//! validate before computing.

/// Arithmetic mean.
pub(crate) fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Unbiased sample variance (n - 1 denominator).
pub(crate) fn variance(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return f64::NAN;
    }
    let m = mean(xs);
    xs.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / (xs.len() - 1) as f64
}

/// Unbiased sample standard deviation.
pub(crate) fn std_dev(xs: &[f64]) -> f64 {
    variance(xs).sqrt()
}

/// Population standard deviation (n denominator).
pub(crate) fn population_std(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    let m = mean(xs);
    (xs.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / xs.len() as f64).sqrt()
}

fn central_moment(xs: &[f64], order: i32) -> f64 {
    let m = mean(xs);
    xs.iter().map(|&x| (x - m).powi(order)).sum::<f64>() / xs.len() as f64
}

/// Biased skewness, `m3 / m2^(3/2)`.
pub(crate) fn skewness(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    let m2 = central_moment(xs, 2);
    central_moment(xs, 3) / m2.powf(1.5)
}

/// Biased excess kurtosis, `m4 / m2^2 - 3`.
pub(crate) fn kurtosis(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    let m2 = central_moment(xs, 2);
    central_moment(xs, 4) / m2.powi(2) - 3.0
}

/// Pearson correlation coefficient of two equally long slices.
pub(crate) fn pearson_r(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.is_empty() || xs.len() != ys.len() {
        return f64::NAN;
    }
    let mx = mean(xs);
    let my = mean(ys);
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        sxy += (x - mx) * (y - my);
        sxx += (x - mx).powi(2);
        syy += (y - my).powi(2);
    }
    sxy / (sxx * syy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn mean_basic() {
        assert_abs_diff_eq!(mean(&[1.0, 2.0, 3.0]), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn mean_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn variance_matches_hand_computation() {
        // values 1..5, sample variance 2.5
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(variance(&xs), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(population_std(&xs), 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn skewness_of_symmetric_data_is_zero() {
        let xs = [-2.0, -1.0, 0.0, 1.0, 2.0];
        assert_abs_diff_eq!(skewness(&xs), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn kurtosis_of_constant_is_nan() {
        assert!(kurtosis(&[3.0, 3.0, 3.0, 3.0]).is_nan());
    }

    #[test]
    fn pearson_of_identical_slices_is_one() {
        let xs = [1.0, 4.0, 2.0, 8.0, 5.0];
        assert_abs_diff_eq!(pearson_r(&xs, &xs), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn pearson_of_anticorrelated_slices_is_minus_one() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [3.0, 2.0, 1.0];
        assert_abs_diff_eq!(pearson_r(&xs, &ys), -1.0, epsilon = 1e-12);
    }
}
