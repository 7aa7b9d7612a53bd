//! Calculator session owning the live state.

use crate::core::{CalculatorState, Event, StateHistory, StateTransition};
use crate::keys::KeyError;
use crate::machine::transition::transition;
use chrono::Utc;
use tracing::{debug, trace};

/// The single live calculator a presentation layer drives.
///
/// Each press replaces the state wholesale and, when something changed,
/// appends an entry to the tape. The tape keeps the newest
/// `tape_capacity` entries.
///
/// # Example
///
/// ```rust
/// use calcpad::machine::Calculator;
///
/// let mut calculator = Calculator::new();
/// for key in ["1", ".", "5", "+", "2", "="] {
///     calculator.press_key(key).unwrap();
/// }
/// assert_eq!(calculator.display(), "3.5");
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    current: CalculatorState,
    history: StateHistory,
    tape_capacity: usize,
}

/// Tape entries kept by [`Calculator::new`].
pub const DEFAULT_TAPE_CAPACITY: usize = 256;

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator in the power-on state
    pub fn new() -> Self {
        Self::with_tape_capacity(DEFAULT_TAPE_CAPACITY)
    }

    /// Create a calculator whose tape keeps at most `capacity` entries.
    ///
    /// A capacity of zero disables the tape.
    pub fn with_tape_capacity(capacity: usize) -> Self {
        Self {
            current: CalculatorState::new(),
            history: StateHistory::new(),
            tape_capacity: capacity,
        }
    }

    /// Apply one event and return the resulting state.
    ///
    /// Ignored presses leave both the state and the tape untouched.
    pub fn press(&mut self, event: Event) -> &CalculatorState {
        let next = transition(&self.current, event);
        if next == self.current {
            return &self.current;
        }

        trace!(
            event = event.name(),
            from = self.current.name(),
            display = %next.display,
            "key applied"
        );
        if next.is_error() {
            debug!(
                operand1 = %self.current.operand1,
                operand2 = %self.current.operand2,
                "calculation has no numeric result"
            );
        }

        let from = std::mem::replace(&mut self.current, next);
        if self.tape_capacity > 0 {
            self.history.push(
                StateTransition {
                    from,
                    to: self.current.clone(),
                    event,
                    timestamp: Utc::now(),
                },
                self.tape_capacity,
            );
        }
        &self.current
    }

    /// Parse a key label and apply it.
    pub fn press_key(&mut self, label: &str) -> Result<&CalculatorState, KeyError> {
        let event: Event = label.parse()?;
        Ok(self.press(event))
    }

    /// Apply events in order, returning the final state.
    pub fn press_all<I>(&mut self, events: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.press(event);
        }
        &self.current
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &CalculatorState {
        &self.current
    }

    /// Text to render on screen
    pub fn display(&self) -> &str {
        &self.current.display
    }

    /// Check if the last calculation failed (pure)
    pub fn is_error(&self) -> bool {
        self.current.is_error()
    }

    /// Get the tape of applied presses (pure)
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn tape_capacity(&self) -> usize {
        self.tape_capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    #[test]
    fn press_updates_state_and_tape() {
        let mut calculator = Calculator::new();

        calculator.press(Event::Digit(3));
        calculator.press(Event::Operator(Operator::Add));
        calculator.press(Event::Digit(4));
        let state = calculator.press(Event::Equals).clone();

        assert_eq!(state.display, "7");
        assert_eq!(calculator.display(), "7");
        assert_eq!(calculator.history().len(), 4);
        assert_eq!(calculator.history().displays(), vec!["3", "3", "4", "7"]);
    }

    #[test]
    fn ignored_press_is_not_recorded() {
        let mut calculator = Calculator::new();

        calculator.press(Event::Operator(Operator::Add));
        calculator.press(Event::Equals);
        calculator.press(Event::Backspace);

        assert_eq!(calculator.current_state(), &CalculatorState::new());
        assert!(calculator.history().is_empty());
    }

    #[test]
    fn press_key_parses_labels() {
        let mut calculator = Calculator::new();

        for key in ["5", "÷", "0", "="] {
            calculator.press_key(key).unwrap();
        }

        assert!(calculator.is_error());
        assert_eq!(calculator.display(), "Error");
    }

    #[test]
    fn press_key_rejects_unknown_label() {
        let mut calculator = Calculator::new();

        let result = calculator.press_key("sin");

        assert_eq!(result.unwrap_err(), KeyError::UnknownKey("sin".to_string()));
        assert!(calculator.history().is_empty());
    }

    #[test]
    fn press_all_folds_events() {
        let mut calculator = Calculator::new();

        let state = calculator.press_all([Event::Digit(9), Event::Backspace]);

        assert_eq!(state, &CalculatorState::new());
        assert_eq!(calculator.history().len(), 2);
    }

    #[test]
    fn tape_path_starts_at_power_on() {
        let mut calculator = Calculator::new();
        calculator.press_all([Event::Digit(1), Event::ClearAll]);

        let path = calculator.history().get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &CalculatorState::new());
        assert_eq!(path[2], &CalculatorState::new());
    }

    #[test]
    fn long_sessions_keep_only_newest_presses() {
        let mut calculator = Calculator::with_tape_capacity(8);

        for i in 0..5_000u32 {
            calculator.press(Event::Digit((i % 10) as u8));
            assert!(calculator.history().len() <= 8);
        }

        assert_eq!(calculator.history().len(), 8);
        let last = calculator.history().transitions().last().unwrap();
        assert_eq!(&last.to, calculator.current_state());
        assert_eq!(last.to.operand1.len(), 5_000);
        let first = &calculator.history().transitions()[0];
        assert_eq!(first.to.operand1.len(), 4_993);
    }

    #[test]
    fn zero_capacity_disables_tape() {
        let mut calculator = Calculator::with_tape_capacity(0);

        calculator.press_all([Event::Digit(2), Event::Operator(Operator::Add), Event::Digit(2)]);
        let state = calculator.press(Event::Equals).clone();

        assert_eq!(state.display, "4");
        assert!(calculator.history().is_empty());
    }

    #[test]
    fn default_uses_default_tape_capacity() {
        assert_eq!(Calculator::default().tape_capacity(), DEFAULT_TAPE_CAPACITY);
        assert_eq!(Calculator::new().tape_capacity(), DEFAULT_TAPE_CAPACITY);
    }
}
