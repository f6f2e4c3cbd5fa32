//! Two-sample Kolmogorov-Smirnov test.

use crate::gof::PairedStat;

/// Asymptotic two-sided survival function of the Kolmogorov distribution,
/// `Q(λ) = 2 Σ (-1)^(j-1) exp(-2 j² λ²)`.
fn kolmogorov_sf(lambda: f64) -> f64 {
    if !lambda.is_finite() {
        return f64::NAN;
    }
    if lambda <= 0.0 {
        return 1.0;
    }
    let mut sum = 0.0;
    let mut sign = 1.0;
    for j in 1..=100 {
        let term = (-2.0 * (j as f64).powi(2) * lambda * lambda).exp();
        sum += sign * term;
        sign = -sign;
        if term < 1e-16 {
            break;
        }
    }
    (2.0 * sum).clamp(0.0, 1.0)
}

/// Two-sample Kolmogorov-Smirnov test: supremum distance between the two
/// empirical CDFs, with the asymptotic two-sided p-value.
pub fn ks_two_sample(a: &[f64], b: &[f64]) -> PairedStat {
    if a.is_empty() || b.is_empty() {
        return PairedStat {
            statistic: f64::NAN,
            significance: f64::NAN,
        };
    }

    let mut s1 = a.to_vec();
    let mut s2 = b.to_vec();
    s1.sort_by(f64::total_cmp);
    s2.sort_by(f64::total_cmp);

    let n1 = s1.len();
    let n2 = s2.len();
    let (n1f, n2f) = (n1 as f64, n2 as f64);

    let mut i = 0;
    let mut j = 0;
    let mut d: f64 = 0.0;
    while i < n1 && j < n2 {
        let x = s1[i].min(s2[j]);
        while i < n1 && s1[i] <= x {
            i += 1;
        }
        while j < n2 && s2[j] <= x {
            j += 1;
        }
        d = d.max((i as f64 / n1f - j as f64 / n2f).abs());
    }

    let en = (n1f * n2f / (n1f + n2f)).sqrt();
    let p = kolmogorov_sf((en + 0.12 + 0.11 / en) * d);

    PairedStat {
        statistic: d,
        significance: p,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn identical_samples_have_zero_statistic() {
        let xs: Vec<f64> = (0..100).map(|i| i as f64 * 0.1).collect();
        let ks = ks_two_sample(&xs, &xs);
        assert_abs_diff_eq!(ks.statistic, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ks.significance, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn disjoint_samples_have_unit_statistic() {
        let a: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let b: Vec<f64> = (0..50).map(|i| 1000.0 + i as f64).collect();
        let ks = ks_two_sample(&a, &b);
        assert_abs_diff_eq!(ks.statistic, 1.0, epsilon = 1e-12);
        assert!(ks.significance < 1e-6);
    }

    #[test]
    fn same_distribution_keeps_large_p() {
        let mut rng = seeded_rng(21);
        let a = normal_sample(&mut rng, 0.0, 1.0, 500);
        let b = normal_sample(&mut rng, 0.0, 1.0, 500);
        let ks = ks_two_sample(&a, &b);
        assert!(ks.statistic < 0.2);
        assert!(ks.significance > 0.001);
    }

    #[test]
    fn empty_sample_yields_nan() {
        let ks = ks_two_sample(&[], &[1.0, 2.0]);
        assert!(ks.statistic.is_nan());
        assert!(ks.significance.is_nan());
    }
}
