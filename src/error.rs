use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrillError {
    /// Empty or non-numeric answer. Nothing was counted.
    #[error("not a number: {raw:?}")]
    InvalidInput { raw: String },
}
