//! Validation-based invariant checks for calculator states.
//!
//! Uses Stillwater's `Validation` type so that a broken state reports every
//! violated invariant at once instead of only the first.
//!
//! # Example
//!
//! ```rust
//! use calcpad::core::CalculatorState;
//! use calcpad::invariants::{validate, InvariantRules};
//!
//! assert!(validate(&CalculatorState::new()).is_success());
//!
//! let capped = InvariantRules::new().max_operand_len(12);
//! assert!(capped.enforce(&CalculatorState::new()).is_success());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{InvariantCheck, InvariantRules};
pub use violations::InvariantViolation;

use crate::core::CalculatorState;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check `state` against the built-in rules.
pub fn validate(state: &CalculatorState) -> Validation<(), NonEmptyVec<InvariantViolation>> {
    InvariantRules::new().enforce(state)
}
