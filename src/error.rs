use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A pairing, team or decision names an id that is not in the input set.
    #[error("invalid reference: {0}")]
    InvalidReference(String),
    #[error("{format} requires exactly {expected} players per group, got {actual}")]
    CardinalityViolation {
        format: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl EngineError {
    pub(crate) fn cardinality(format: &'static str, expected: usize, actual: usize) -> Self {
        Self::CardinalityViolation {
            format,
            expected,
            actual,
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
