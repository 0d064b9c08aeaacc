use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("Dimension mismatch for {name}: expected {expected} components, found {found}")]
    DimensionMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Invalid value error: {0}")]
    InvalidValue(String),
}
