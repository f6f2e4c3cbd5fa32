use crate::distribution::*;
use crate::stats;

macro_const! {
    const DOC: &str = r"
Normal distribution $N(\mu, \sigma)$

Parameters are closed-form: `Mu` is the sample mean, `Sigma` the population
standard deviation. The cost function is a constant stub since nothing is
left to optimize.

- Parameters: **Mu**, **Sigma**
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Normal {}

impl Normal {
    pub fn new() -> Self {
        Self {}
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl VariantInfoTrait for Normal {
    fn name(&self) -> &'static str {
        "Normal"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &["Mu", "Sigma"]
    }
}

impl VariantFitTrait for Normal {
    fn estimate(&self, sample: &[f64]) -> Result<ParameterSet, Error> {
        Ok(ParameterSet::from_entries(&[
            ("Mu", stats::mean(sample)),
            ("Sigma", stats::population_std(sample)),
        ]))
    }

    fn synthesize(
        &self,
        params: &ParameterSet,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Array1<f64>, Error> {
        let mu = params.require("Mu")?;
        let sigma = params.require("Sigma")?;
        let dist =
            rand_distr::Normal::new(mu, sigma).map_err(|e| Error::Synthesis(e.to_string()))?;
        Ok((0..n).map(|_| dist.sample(rng)).collect())
    }

    fn cost(&self, _params: &[f64], _sample: &[f64]) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn recovers_moments_in_closed_form() {
        let mut rng = seeded_rng(0);
        let sample = normal_sample(&mut rng, 12.6, 4.1, 1000);
        let params = Normal::new().estimate(&sample).unwrap();
        assert_abs_diff_eq!(params.get("Mu").unwrap(), 12.6, epsilon = 0.5);
        assert_abs_diff_eq!(params.get("Sigma").unwrap(), 4.1, epsilon = 0.5);
    }

    #[test]
    fn synthesized_length_matches() {
        let mut rng = seeded_rng(1);
        let params = ParameterSet::from_entries(&[("Mu", 0.0), ("Sigma", 1.0)]);
        let synth = Normal::new().synthesize(&params, 42, &mut rng).unwrap();
        assert_eq!(synth.len(), 42);
    }

    #[test]
    fn negative_sigma_fails_synthesis() {
        let mut rng = seeded_rng(2);
        let params = ParameterSet::from_entries(&[("Mu", 0.0), ("Sigma", -1.0)]);
        assert!(matches!(
            Normal::new().synthesize(&params, 10, &mut rng),
            Err(Error::Synthesis(_))
        ));
    }
}
