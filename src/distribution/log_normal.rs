use crate::distribution::*;

use statrs::distribution::Continuous;

macro_const! {
    const DOC: &str = r"
Log-normal distribution with free shape and unit scale

`Shape` is found by minimizing the negative log-likelihood of the log-normal
pdf with the simplex search; synthesis draws `lognormal(Shape, 1.0)`.

- Parameters: **Shape**
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LogNormal {
    pub simplex: SimplexFit,
}

impl LogNormal {
    pub fn new(simplex: SimplexFit) -> Self {
        Self { simplex }
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl VariantInfoTrait for LogNormal {
    fn name(&self) -> &'static str {
        "LogNormal"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &["Shape"]
    }
}

impl VariantFitTrait for LogNormal {
    fn estimate(&self, sample: &[f64]) -> Result<ParameterSet, Error> {
        let best = self.simplex.minimize(|p| self.cost(p, sample), &[1.0])?;
        Ok(ParameterSet::from_entries(&[("Shape", best[0])]))
    }

    fn synthesize(
        &self,
        params: &ParameterSet,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Array1<f64>, Error> {
        let shape = params.require("Shape")?;
        let dist = rand_distr::LogNormal::new(shape, 1.0)
            .map_err(|e| Error::Synthesis(e.to_string()))?;
        Ok((0..n).map(|_| dist.sample(rng)).collect())
    }

    fn cost(&self, params: &[f64], sample: &[f64]) -> f64 {
        match statrs::distribution::LogNormal::new(0.0, params[0]) {
            Ok(d) => -sample.iter().map(|&x| d.ln_pdf(x)).sum::<f64>(),
            Err(_) => f64::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn cost_is_infinite_for_non_positive_shape() {
        let variant = LogNormal::default();
        let sample = [1.0, 2.0, 3.0];
        assert!(variant.cost(&[-1.0], &sample).is_infinite());
        assert!(variant.cost(&[0.0], &sample).is_infinite());
    }

    #[test]
    fn cost_is_infinite_for_non_positive_data() {
        let variant = LogNormal::default();
        assert!(variant.cost(&[1.0], &[-1.0, 2.0]).is_infinite());
    }

    #[test]
    fn estimates_shape_of_log_normal_data() {
        use crate::tests::*;
        let mut rng = seeded_rng(4);
        let dist = rand_distr::LogNormal::new(0.0, 0.8).unwrap();
        let sample: Vec<f64> = (0..1000).map(|_| dist.sample(&mut rng)).collect();
        let params = LogNormal::default().estimate(&sample).unwrap();
        assert_abs_diff_eq!(params.get("Shape").unwrap(), 0.8, epsilon = 0.2);
    }
}
