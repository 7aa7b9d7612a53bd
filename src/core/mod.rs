//! Core calculator types.
//!
//! This module contains the plain values the state machine works on:
//! - `CalculatorState` and `Operator`
//! - `Event`, one per key
//! - `Guard` predicates for transition control
//! - Immutable history of applied presses
//!
//! Nothing in here performs I/O or mutates shared state.

mod event;
mod guard;
mod history;
mod state;

pub use event::Event;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{CalculatorState, Operator, EMPTY_DISPLAY, ERROR_DISPLAY};

pub(crate) use state::display_for;
