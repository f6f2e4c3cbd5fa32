use crate::transform::*;

macro_const! {
    const DOC: &str = r"
Square, `x²`; always valid
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SquareTransform {}

impl SquareTransform {
    pub const fn doc() -> &'static str {
        DOC
    }
}

impl TransformTrait for SquareTransform {
    fn name(&self) -> &'static str {
        "Square"
    }

    fn apply(&self, sample: &[f64]) -> Option<Array1<f64>> {
        Some(sample.iter().map(|&x| x * x).collect())
    }
}
