//! Shape transforms feeding the normality workflow.

pub(crate) use crate::error::Error;

pub(crate) use macro_const::macro_const;
pub(crate) use ndarray::Array1;
pub(crate) use schemars::JsonSchema;
pub(crate) use serde::{Deserialize, Serialize};

use enum_dispatch::enum_dispatch;

mod exponential;
pub use exponential::ExponentialTransform;

mod inverse;
pub use inverse::InverseTransform;

mod log;
pub use log::LogTransform;

mod original;
pub use original::OriginalTransform;

mod root;
pub use root::RootTransform;

mod square;
pub use square::SquareTransform;

/// A shape transform with its own validity rule.
#[enum_dispatch]
pub trait TransformTrait {
    /// Name used as the head label in normality ranking tables.
    fn name(&self) -> &'static str;

    /// Transformed copy of `sample`, or `None` when the sample violates
    /// the transform's validity rule.
    fn apply(&self, sample: &[f64]) -> Option<Array1<f64>>;
}

/// All shape transforms as a single tagged union
#[enum_dispatch(TransformTrait)]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[non_exhaustive]
pub enum Transform {
    Original(OriginalTransform),
    Log(LogTransform),
    Exponential(ExponentialTransform),
    Square(SquareTransform),
    Root(RootTransform),
    Inverse(InverseTransform),
}

impl Transform {
    /// The transforms in canonical order, `Original` first.
    pub fn all() -> Vec<Self> {
        vec![
            OriginalTransform::default().into(),
            LogTransform::default().into(),
            ExponentialTransform::default().into(),
            SquareTransform::default().into(),
            RootTransform::default().into(),
            InverseTransform::default().into(),
        ]
    }
}

/// One pipeline entry: the transform and its result, `None` marking
/// "invalid for this input".
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TransformEntry {
    pub transform: Transform,
    pub data: Option<Array1<f64>>,
}

/// The transformed copies of one sample.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TransformSet {
    entries: Vec<TransformEntry>,
}

impl TransformSet {
    /// Apply every transform to `sample`, keeping invalid results as
    /// explicit markers.
    pub fn candidates(sample: &[f64]) -> Result<Self, Error> {
        if sample.is_empty() {
            return Err(Error::EmptySample);
        }
        Ok(Self {
            entries: Transform::all()
                .into_iter()
                .map(|transform| {
                    let data = transform.apply(sample);
                    TransformEntry { transform, data }
                })
                .collect(),
        })
    }

    pub fn entries(&self) -> &[TransformEntry] {
        &self.entries
    }

    /// The valid data of the named transform, if any.
    pub fn get(&self, name: &str) -> Option<&Array1<f64>> {
        self.entries
            .iter()
            .find(|e| e.transform.name() == name)
            .and_then(|e| e.data.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
