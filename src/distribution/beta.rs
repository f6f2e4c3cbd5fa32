use crate::distribution::*;

use statrs::distribution::Continuous;

macro_const! {
    const DOC: &str = r"
Beta distribution $B(a, b)$ on $(0, 1)$

Both shape parameters are found jointly by minimizing the negative
log-likelihood with the simplex search from the initial guess $(1, 1)$.

- Parameters: **A**, **B**
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Beta {
    pub simplex: SimplexFit,
}

impl Beta {
    pub fn new(simplex: SimplexFit) -> Self {
        Self { simplex }
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl VariantInfoTrait for Beta {
    fn name(&self) -> &'static str {
        "Beta"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &["A", "B"]
    }
}

impl VariantFitTrait for Beta {
    fn estimate(&self, sample: &[f64]) -> Result<ParameterSet, Error> {
        let best = self
            .simplex
            .minimize(|p| self.cost(p, sample), &[1.0, 1.0])?;
        Ok(ParameterSet::from_entries(&[("A", best[0]), ("B", best[1])]))
    }

    fn synthesize(
        &self,
        params: &ParameterSet,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Array1<f64>, Error> {
        let a = params.require("A")?;
        let b = params.require("B")?;
        let dist = rand_distr::Beta::new(a, b).map_err(|e| Error::Synthesis(e.to_string()))?;
        Ok((0..n).map(|_| dist.sample(rng)).collect())
    }

    fn cost(&self, params: &[f64], sample: &[f64]) -> f64 {
        match statrs::distribution::Beta::new(params[0], params[1]) {
            Ok(d) => -sample.iter().map(|&x| d.ln_pdf(x)).sum::<f64>(),
            Err(_) => f64::INFINITY,
        }
    }
}
