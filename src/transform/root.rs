use crate::transform::*;

macro_const! {
    const DOC: &str = r"
Square root, `√x`; valid only when every value is non-negative
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RootTransform {}

impl RootTransform {
    pub const fn doc() -> &'static str {
        DOC
    }
}

impl TransformTrait for RootTransform {
    fn name(&self) -> &'static str {
        "Root"
    }

    fn apply(&self, sample: &[f64]) -> Option<Array1<f64>> {
        if sample.iter().all(|&x| x >= 0.0) {
            Some(sample.iter().map(|&x| x.sqrt()).collect())
        } else {
            None
        }
    }
}
