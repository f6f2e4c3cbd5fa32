use crate::distribution::*;

use rand::distr::StandardUniform;

macro_const! {
    const DOC: &str = r"
Power-law distribution with density $\alpha x^{\alpha - 1}$ on $(0, 1]$

`Alpha` is found by minimizing the negative log-likelihood with the simplex
search. Synthesis branches on the fitted exponent: a zero `Alpha` yields a
constant array equal to `Alpha`, a positive one draws `power(Alpha)` via
inverse-transform sampling, and a negative one draws `power(-Alpha)` and
inverts every value.

- Parameters: **Alpha**
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Power {
    pub simplex: SimplexFit,
}

impl Power {
    pub fn new(simplex: SimplexFit) -> Self {
        Self { simplex }
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    fn ln_pdf(alpha: f64, x: f64) -> f64 {
        if x <= 0.0 || x > 1.0 {
            return f64::NEG_INFINITY;
        }
        alpha.ln() + (alpha - 1.0) * x.ln()
    }

    fn draw_power(alpha: f64, rng: &mut dyn RngCore) -> f64 {
        // inverse transform: U^(1/alpha) has density alpha * x^(alpha - 1)
        let u: f64 = StandardUniform.sample(rng);
        u.powf(1.0 / alpha)
    }
}

impl VariantInfoTrait for Power {
    fn name(&self) -> &'static str {
        "Power"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &["Alpha"]
    }
}

impl VariantFitTrait for Power {
    fn estimate(&self, sample: &[f64]) -> Result<ParameterSet, Error> {
        let best = self.simplex.minimize(|p| self.cost(p, sample), &[1.0])?;
        Ok(ParameterSet::from_entries(&[("Alpha", best[0])]))
    }

    fn synthesize(
        &self,
        params: &ParameterSet,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Array1<f64>, Error> {
        let alpha = params.require("Alpha")?;
        if !alpha.is_finite() {
            return Err(Error::Synthesis(format!(
                "power exponent must be finite, got {alpha}"
            )));
        }
        let out = if alpha == 0.0 {
            Array1::from_elem(n, alpha)
        } else if alpha > 0.0 {
            (0..n).map(|_| Self::draw_power(alpha, rng)).collect()
        } else {
            (0..n)
                .map(|_| 1.0 / Self::draw_power(-alpha, rng))
                .collect()
        };
        Ok(out)
    }

    fn cost(&self, params: &[f64], sample: &[f64]) -> f64 {
        let alpha = params[0];
        if !(alpha > 0.0) || !alpha.is_finite() {
            return f64::INFINITY;
        }
        -sample.iter().map(|&x| Self::ln_pdf(alpha, x)).sum::<f64>()
    }
}
