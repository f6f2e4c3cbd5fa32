use crate::transform::*;

/// Values at or above this would overflow `exp` into meaninglessly large
/// magnitudes.
const OVERFLOW_LIMIT: f64 = 1234.0;

macro_const! {
    const DOC: &str = r"
Exponential, `exp(x)`; valid only below an overflow guard
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ExponentialTransform {}

impl ExponentialTransform {
    pub const fn doc() -> &'static str {
        DOC
    }
}

impl TransformTrait for ExponentialTransform {
    fn name(&self) -> &'static str {
        "Exponential"
    }

    fn apply(&self, sample: &[f64]) -> Option<Array1<f64>> {
        if sample.iter().all(|&x| x < OVERFLOW_LIMIT) {
            Some(sample.iter().map(|&x| x.exp()).collect())
        } else {
            None
        }
    }
}
