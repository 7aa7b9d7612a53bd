//! The calculator state machine.
//!
//! - **Reducer**: `transition` maps a state and one event to the next state
//! - **Guards**: `guard_for` / `can_apply` expose each event's precondition
//! - **Session**: `Calculator` owns the live state and the tape of presses
//!
//! The reducer is pure; the session is the only place that holds mutable
//! state or emits log events.

mod calculator;
mod transition;

pub use calculator::{Calculator, DEFAULT_TAPE_CAPACITY};
pub use transition::{can_apply, evaluate, format_result, guard_for, transition};
