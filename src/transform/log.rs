use crate::transform::*;

macro_const! {
    const DOC: &str = r"
Shifted natural logarithm, `ln(x + 1)`; valid only when every value is
non-negative (the shift avoids the gap at zero)
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LogTransform {}

impl LogTransform {
    pub const fn doc() -> &'static str {
        DOC
    }
}

impl TransformTrait for LogTransform {
    fn name(&self) -> &'static str {
        "Log"
    }

    fn apply(&self, sample: &[f64]) -> Option<Array1<f64>> {
        if sample.iter().all(|&x| x >= 0.0) {
            Some(sample.iter().map(|&x| (x + 1.0).ln()).collect())
        } else {
            None
        }
    }
}
