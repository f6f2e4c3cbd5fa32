use crate::transform::*;

macro_const! {
    const DOC: &str = r"
Reciprocal, `1/x`; valid only when no value is exactly zero
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InverseTransform {}

impl InverseTransform {
    pub const fn doc() -> &'static str {
        DOC
    }
}

impl TransformTrait for InverseTransform {
    fn name(&self) -> &'static str {
        "Inverse"
    }

    fn apply(&self, sample: &[f64]) -> Option<Array1<f64>> {
        if sample.iter().all(|&x| x != 0.0) {
            Some(sample.iter().map(|&x| 1.0 / x).collect())
        } else {
            None
        }
    }
}
