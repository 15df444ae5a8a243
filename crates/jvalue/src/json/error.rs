//! JSON text parse error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty JSON document")]
    Empty,
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("number `{0}` is outside the decimal range")]
    NumberOutOfRange(String),
}
