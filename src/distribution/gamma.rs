use crate::distribution::*;

use statrs::distribution::Continuous;

macro_const! {
    const DOC: &str = r"
Gamma distribution with free shape and unit scale

`Shape` is found by minimizing the negative log-likelihood with the simplex
search; synthesis draws `gamma(Shape, 1.0)`.

- Parameters: **Shape**
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Gamma {
    pub simplex: SimplexFit,
}

impl Gamma {
    pub fn new(simplex: SimplexFit) -> Self {
        Self { simplex }
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl VariantInfoTrait for Gamma {
    fn name(&self) -> &'static str {
        "Gamma"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &["Shape"]
    }
}

impl VariantFitTrait for Gamma {
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
        let dist =
            rand_distr::Gamma::new(shape, 1.0).map_err(|e| Error::Synthesis(e.to_string()))?;
        Ok((0..n).map(|_| dist.sample(rng)).collect())
    }

    fn cost(&self, params: &[f64], sample: &[f64]) -> f64 {
        match statrs::distribution::Gamma::new(params[0], 1.0) {
            Ok(d) => -sample.iter().map(|&x| d.ln_pdf(x)).sum::<f64>(),
            Err(_) => f64::INFINITY,
        }
    }
}
