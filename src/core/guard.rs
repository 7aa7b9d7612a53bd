//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether an event can
//! change the calculator. An event whose guard fails is a no-op.

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{CalculatorState, Guard};
///
/// let has_first_operand = Guard::new(|s: &CalculatorState| !s.operand1.trim().is_empty());
///
/// assert!(!has_first_operand.check(&CalculatorState::new()));
/// ```
pub struct Guard<S> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// A guard that never blocks.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S> std::fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
