use crate::transform::*;

macro_const! {
    const DOC: &str = r"
Identity transform; the untouched sample, always valid
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OriginalTransform {}

impl OriginalTransform {
    pub const fn doc() -> &'static str {
        DOC
    }
}

impl TransformTrait for OriginalTransform {
    fn name(&self) -> &'static str {
        "Original"
    }

    fn apply(&self, sample: &[f64]) -> Option<Array1<f64>> {
        Some(sample.iter().copied().collect())
    }
}
