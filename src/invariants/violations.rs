//! Invariant violations.

use thiserror::Error;

/// A broken calculator invariant
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvariantViolation {
    #[error("Operand {which} is malformed: '{value}'")]
    MalformedOperand { which: &'static str, value: String },

    #[error("Operand {which} has {len} characters (limit: {max})")]
    OperandTooLong {
        which: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Display '{display}' does not match the active operand (expected: '{expected}')")]
    DisplayMismatch { display: String, expected: String },

    #[error("Operator pending without a first operand")]
    OperatorWithoutOperand,

    #[error("Second operand '{0}' entered without an operator")]
    OperandWithoutOperator(String),

    #[error("Error display with leftover operands or operator")]
    DirtyErrorState,

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
