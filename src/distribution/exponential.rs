use crate::distribution::*;

use statrs::distribution::Continuous;

macro_const! {
    const DOC: &str = r"
Exponential distribution parameterized by its scale

`Scale` (the distribution mean) is found by minimizing the negative
log-likelihood with the simplex search; synthesis draws samples with rate
`1 / Scale`.

- Parameters: **Scale**
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Exponential {
    pub simplex: SimplexFit,
}

impl Exponential {
    pub fn new(simplex: SimplexFit) -> Self {
        Self { simplex }
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl VariantInfoTrait for Exponential {
    fn name(&self) -> &'static str {
        "Exponential"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &["Scale"]
    }
}

impl VariantFitTrait for Exponential {
    fn estimate(&self, sample: &[f64]) -> Result<ParameterSet, Error> {
        let best = self.simplex.minimize(|p| self.cost(p, sample), &[1.0])?;
        Ok(ParameterSet::from_entries(&[("Scale", best[0])]))
    }

    fn synthesize(
        &self,
        params: &ParameterSet,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Array1<f64>, Error> {
        let scale = params.require("Scale")?;
        let dist =
            rand_distr::Exp::new(1.0 / scale).map_err(|e| Error::Synthesis(e.to_string()))?;
        Ok((0..n).map(|_| dist.sample(rng)).collect())
    }

    fn cost(&self, params: &[f64], sample: &[f64]) -> f64 {
        let scale = params[0];
        if !(scale > 0.0) || !scale.is_finite() {
            return f64::INFINITY;
        }
        match statrs::distribution::Exp::new(1.0 / scale) {
            Ok(d) => -sample.iter().map(|&x| d.ln_pdf(x)).sum::<f64>(),
            Err(_) => f64::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn recovers_scale_of_exponential_data() {
        let mut rng = seeded_rng(5);
        let sample = exponential_sample(&mut rng, 3.2, 1000);
        let params = Exponential::default().estimate(&sample).unwrap();
        assert_abs_diff_eq!(params.get("Scale").unwrap(), 3.2, epsilon = 0.5);
    }

    #[test]
    fn cost_is_infinite_outside_domain() {
        let variant = Exponential::default();
        assert!(variant.cost(&[-2.0], &[1.0, 2.0]).is_infinite());
        assert!(variant.cost(&[0.0], &[1.0, 2.0]).is_infinite());
    }

    #[test]
    fn negative_scale_fails_synthesis() {
        let mut rng = seeded_rng(6);
        let params = ParameterSet::from_entries(&[("Scale", -3.0)]);
        assert!(matches!(
            Exponential::default().synthesize(&params, 10, &mut rng),
            Err(Error::Synthesis(_))
        ));
    }
}
