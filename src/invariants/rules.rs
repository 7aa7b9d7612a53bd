//! Invariant rules for calculator states using Validation.

use crate::core::{display_for, CalculatorState};
use crate::invariants::violations::InvariantViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type InvariantCheck =
    Box<dyn Fn(&CalculatorState) -> Validation<(), NonEmptyVec<InvariantViolation>> + Send + Sync>;

/// Rules every calculator state is checked against.
///
/// The built-in rules always run. An operand length cap and custom checks
/// are opt-in.
#[derive(Default)]
pub struct InvariantRules {
    pub(crate) max_operand_len: Option<usize>,
    pub(crate) required_checks: Vec<InvariantCheck>,
}

impl InvariantRules {
    pub fn new() -> Self {
        Self {
            max_operand_len: None,
            required_checks: Vec::new(),
        }
    }

    /// Cap the number of characters in either operand
    pub fn max_operand_len(mut self, n: usize) -> Self {
        self.max_operand_len = Some(n);
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&CalculatorState) -> Validation<(), NonEmptyVec<InvariantViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&CalculatorState) -> bool + Send + Sync + 'static,
    {
        let check = move |state: &CalculatorState| {
            if predicate(state) {
                Validation::success(())
            } else {
                Validation::fail(InvariantViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Check all rules, accumulating ALL violations.
    pub fn enforce(&self, state: &CalculatorState) -> Validation<(), NonEmptyVec<InvariantViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<InvariantViolation>>> = vec![
            check_operand("operand1", &state.operand1, true),
            check_operand("operand2", &state.operand2, false),
            check_pending_operator(state),
            check_display(state),
        ];

        if let Some(max) = self.max_operand_len {
            checks.push(check_length("operand1", &state.operand1, max));
            checks.push(check_length("operand2", &state.operand2, max));
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(state));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

fn ensure<F>(holds: bool, violation: F) -> Validation<(), NonEmptyVec<InvariantViolation>>
where
    F: FnOnce() -> InvariantViolation,
{
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

// Only a computed result can put a sign in front of operand1.
fn check_operand(
    which: &'static str,
    operand: &str,
    signed: bool,
) -> Validation<(), NonEmptyVec<InvariantViolation>> {
    let body = if signed {
        operand.strip_prefix('-').unwrap_or(operand)
    } else {
        operand
    };
    let well_formed =
        body.chars().all(|c| c.is_ascii_digit() || c == '.') && body.matches('.').count() <= 1;

    ensure(well_formed, || InvariantViolation::MalformedOperand {
        which,
        value: operand.to_string(),
    })
}

fn check_length(
    which: &'static str,
    operand: &str,
    max: usize,
) -> Validation<(), NonEmptyVec<InvariantViolation>> {
    let len = operand.chars().count();
    ensure(len <= max, || InvariantViolation::OperandTooLong { which, len, max })
}

fn check_pending_operator(state: &CalculatorState) -> Validation<(), NonEmptyVec<InvariantViolation>> {
    if state.operator.is_some() {
        ensure(!state.operand1.trim().is_empty(), || {
            InvariantViolation::OperatorWithoutOperand
        })
    } else {
        ensure(state.operand2.is_empty(), || {
            InvariantViolation::OperandWithoutOperator(state.operand2.clone())
        })
    }
}

fn check_display(state: &CalculatorState) -> Validation<(), NonEmptyVec<InvariantViolation>> {
    if state.is_error() {
        let clean =
            state.operand1.is_empty() && state.operand2.is_empty() && state.operator.is_none();
        return ensure(clean, || InvariantViolation::DirtyErrorState);
    }

    let expected = display_for(state.active_operand());
    // Right after an operator key the first operand stays on screen.
    let waiting = state.operator.is_some()
        && state.operand2.is_empty()
        && state.display == state.operand1;

    ensure(state.display == expected || waiting, || {
        InvariantViolation::DisplayMismatch {
            display: state.display.clone(),
            expected,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn state(operand1: &str, operand2: &str, operator: Option<Operator>, display: &str) -> CalculatorState {
        CalculatorState {
            operand1: operand1.to_string(),
            operand2: operand2.to_string(),
            operator,
            display: display.to_string(),
        }
    }

    #[test]
    fn well_formed_states_pass() {
        let rules = InvariantRules::new();

        for s in [
            CalculatorState::new(),
            state("12.5", "", None, "12.5"),
            state("12.5", "", Some(Operator::Add), "12.5"),
            state("12.5", "", Some(Operator::Add), "0"),
            state("12.5", "3.", Some(Operator::Add), "3."),
            state("-4", "", None, "-4"),
            state("", "", None, "Error"),
        ] {
            assert!(rules.enforce(&s).is_success(), "{s:?} should pass");
        }
    }

    #[test]
    fn enforcement_accumulates_all_violations() {
        let rules = InvariantRules::new();
        let broken = state("1..2", "-3", None, "7");

        match rules.enforce(&broken) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 4);
                assert!(errors.iter().any(|e| matches!(
                    e,
                    InvariantViolation::MalformedOperand { which: "operand1", .. }
                )));
                assert!(errors.iter().any(|e| matches!(
                    e,
                    InvariantViolation::MalformedOperand { which: "operand2", .. }
                )));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, InvariantViolation::OperandWithoutOperator(_))));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, InvariantViolation::DisplayMismatch { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn operator_requires_first_operand() {
        let rules = InvariantRules::new();
        let result = rules.enforce(&state("", "", Some(Operator::Divide), "0"));

        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors
                .iter()
                .any(|e| matches!(e, InvariantViolation::OperatorWithoutOperand)));
        }
    }

    #[test]
    fn error_display_must_be_clean() {
        let rules = InvariantRules::new();
        let result = rules.enforce(&state("5", "", None, "Error"));

        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors
                .iter()
                .any(|e| matches!(e, InvariantViolation::DirtyErrorState)));
        }
    }

    #[test]
    fn max_operand_len_enforcement() {
        let rules = InvariantRules::new().max_operand_len(3);

        assert!(rules.enforce(&state("123", "", None, "123")).is_success());

        let result = rules.enforce(&state("1234", "", None, "1234"));
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors.iter().any(|e| matches!(
                e,
                InvariantViolation::OperandTooLong { len: 4, max: 3, .. }
            )));
        }
    }

    #[test]
    fn custom_checks_run() {
        let rules = InvariantRules::new()
            .require_pred(|s| !s.operand1.starts_with('0'), "No leading zero".to_string())
            .require(|s: &CalculatorState| {
                if s.operator != Some(Operator::Divide) {
                    Validation::success(())
                } else {
                    Validation::fail(InvariantViolation::CustomCheckFailed {
                        message: "Division disabled".to_string(),
                    })
                }
            });

        assert!(rules.enforce(&state("1", "", None, "1")).is_success());
        assert!(rules.enforce(&state("05", "", None, "05")).is_failure());
        assert!(rules
            .enforce(&state("5", "", Some(Operator::Divide), "5"))
            .is_failure());
    }
}
