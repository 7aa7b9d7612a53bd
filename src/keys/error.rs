//! Key label errors.

use thiserror::Error;

/// Errors that can occur when reading key labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Unknown key label '{0}'")]
    UnknownKey(String),

    #[error("Empty key label")]
    Empty,
}
