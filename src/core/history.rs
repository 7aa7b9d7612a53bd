//! Tape of applied key presses.
//!
//! Tracks calculator transitions over time. Only presses that changed the
//! state are recorded.

use super::event::Event;
use super::state::CalculatorState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied key press.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{CalculatorState, Event, StateTransition};
/// use calcpad::machine::transition;
/// use chrono::Utc;
///
/// let from = CalculatorState::new();
/// let to = transition(&from, Event::Digit(7));
/// let record = StateTransition {
///     from,
///     to,
///     event: Event::Digit(7),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to.display, "7");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state before the press
    pub from: CalculatorState,
    /// The state after the press
    pub to: CalculatorState,
    /// The key that was pressed
    pub event: Event,
    /// When the press happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions.
///
/// `record` returns a new history with the transition added; the session
/// appends in place with a capacity instead.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcpad::core::{CalculatorState, Event, StateHistory, StateTransition};
    /// use chrono::Utc;
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(StateTransition {
    ///     from: CalculatorState::new(),
    ///     to: CalculatorState::new(),
    ///     event: Event::ClearAll,
    ///     timestamp: Utc::now(),
    /// });
    /// assert_eq!(new_history.transitions().len(), 1);
    /// assert_eq!(history.transitions().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append in place, keeping at most `capacity` of the newest entries.
    ///
    /// A capacity of zero records nothing.
    pub(crate) fn push(&mut self, transition: StateTransition, capacity: usize) {
        if capacity == 0 {
            return;
        }
        if self.transitions.len() >= capacity {
            let excess = self.transitions.len() + 1 - capacity;
            self.transitions.drain(..excess);
        }
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first recorded `from` state, then the `to` state of each
    /// transition.
    pub fn get_path(&self) -> Vec<&CalculatorState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// The display after each recorded press, oldest first.
    pub fn displays(&self) -> Vec<&str> {
        self.transitions
            .iter()
            .map(|t| t.to.display.as_str())
            .collect()
    }

    /// Time between the first and last recorded press.
    ///
    /// Returns `None` if nothing was recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
