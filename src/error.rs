/// Error returned from fitting, scoring and ranking operations
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum Error {
    #[error("sample is empty")]
    EmptySample,

    #[error("sample length {actual} is smaller than the minimum required length {minimum}")]
    ShortSample { actual: usize, minimum: usize },

    #[error("samples must have equal lengths, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("KDE curves must have equal grid cardinality, got {left} and {right}")]
    GridMismatch { left: usize, right: usize },

    #[error("cannot rank an empty collection of distribution fits")]
    EmptyRanking,

    #[error("no valid transform left after filtering")]
    NoValidTransform,

    #[error("simplex search failed: {0}")]
    Optimizer(String),

    #[error("cannot synthesize sample: {0}")]
    Synthesis(String),
}
