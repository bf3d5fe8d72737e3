use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// A non-empty trimmed token was not a base-10 integer literal.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// Negative values are rejected; all of them are listed in the order
    /// encountered, e.g. `negatives not allowed: [-1, -3, -4]`.
    #[error("negatives not allowed: {0:?}")]
    NegativeNumbers(Vec<i64>),
}
