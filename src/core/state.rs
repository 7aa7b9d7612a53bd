//! Calculator state value.
//!
//! A `CalculatorState` is an immutable snapshot of everything the keypad
//! shows and remembers: two operand strings, the pending operator and the
//! display text. Transitions never mutate a state in place; they build the
//! next one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown when a computation has no numeric result.
pub const ERROR_DISPLAY: &str = "Error";

/// Text shown when the active operand is empty.
pub const EMPTY_DISPLAY: &str = "0";

/// Binary operator waiting for its second operand.
///
/// Serializes as the symbol printed on its key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "−")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The key label for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Snapshot of the calculator.
///
/// # Example
///
/// ```rust
/// use calcpad::core::CalculatorState;
///
/// let state = CalculatorState::new();
/// assert_eq!(state.display, "0");
/// assert!(state.operand1.is_empty());
/// assert!(state.operator.is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Left operand as typed, or the last result
    pub operand1: String,
    /// Right operand as typed
    pub operand2: String,
    /// Pending operation, if any
    pub operator: Option<Operator>,
    /// What the screen shows
    pub display: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// The power-on state: nothing entered, display `"0"`.
    pub fn new() -> Self {
        Self {
            operand1: String::new(),
            operand2: String::new(),
            operator: None,
            display: EMPTY_DISPLAY.to_string(),
        }
    }

    /// The operand keystrokes currently edit.
    ///
    /// `operand1` until an operator is pending, `operand2` afterwards.
    pub fn active_operand(&self) -> &str {
        if self.operator.is_none() {
            &self.operand1
        } else {
            &self.operand2
        }
    }

    /// Whether the last `=` failed (division by zero or overflow).
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Name of the entry mode, for diagnostics.
    pub fn name(&self) -> &str {
        if self.is_error() {
            "Error"
        } else if self.operator.is_none() {
            "EnteringFirst"
        } else {
            "EnteringSecond"
        }
    }
}

/// Display text for an operand: the operand itself, or `"0"` when empty.
pub(crate) fn display_for(operand: &str) -> String {
    if operand.is_empty() {
        EMPTY_DISPLAY.to_string()
    } else {
        operand.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(operand1: &str, operand2: &str, operator: Option<Operator>, display: &str) -> CalculatorState {
        CalculatorState {
            operand1: operand1.to_string(),
            operand2: operand2.to_string(),
            operator,
            display: display.to_string(),
        }
    }

    #[test]
    fn new_state_shows_zero() {
        let s = CalculatorState::new();
        assert_eq!(s, state("", "", None, "0"));
        assert_eq!(s, CalculatorState::default());
    }

    #[test]
    fn active_operand_follows_operator() {
        let first = state("12", "", None, "12");
        assert_eq!(first.active_operand(), "12");

        let second = state("12", "3", Some(Operator::Add), "3");
        assert_eq!(second.active_operand(), "3");
    }

    #[test]
    fn name_reflects_entry_mode() {
        assert_eq!(CalculatorState::new().name(), "EnteringFirst");
        assert_eq!(state("1", "", Some(Operator::Divide), "1").name(), "EnteringSecond");
        assert_eq!(state("", "", None, "Error").name(), "Error");
    }

    #[test]
    fn is_error_identifies_error_display() {
        assert!(state("", "", None, ERROR_DISPLAY).is_error());
        assert!(!CalculatorState::new().is_error());
    }

    #[test]
    fn operator_symbols_match_keys() {
        let symbols: Vec<&str> = Operator::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, vec!["+", "−", "×", "÷"]);
        assert_eq!(Operator::Multiply.to_string(), "×");
    }

    #[test]
    fn state_serializes_with_operator_symbol() {
        let s = state("8", "2", Some(Operator::Subtract), "2");
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"operator\":\"−\""));

        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(s, deserialized);
    }

    #[test]
    fn display_for_empty_operand_is_zero() {
        assert_eq!(display_for(""), "0");
        assert_eq!(display_for("4."), "4.");
    }
}
