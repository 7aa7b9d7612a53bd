//! Calcpad: a pure functional keypad calculator core
//!
//! Calcpad keeps the arithmetic of a pocket calculator apart from whatever
//! draws its buttons. The core is one pure reducer over a small state value;
//! a presentation layer feeds it key presses and renders `display`.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState` holds two operand strings, an optional
//!   pending operator and the display text
//! - **Events**: one `Event` per key (`0`-`9`, `.`, `+ − × ÷`, `=`, `C`, `AC`)
//! - **Guards**: pure preconditions; an event whose guard fails is a no-op
//! - **History**: immutable tape of the presses that changed something
//!
//! # Example
//!
//! ```rust
//! use calcpad::core::{CalculatorState, Event, Operator};
//! use calcpad::machine::transition;
//!
//! let state = CalculatorState::new();
//! let state = transition(&state, Event::Digit(5));
//! let state = transition(&state, Event::Operator(Operator::Divide));
//! let state = transition(&state, Event::Digit(0));
//! let state = transition(&state, Event::Equals);
//!
//! assert_eq!(state.display, "Error");
//! assert!(state.operand1.is_empty());
//! assert!(state.operator.is_none());
//! ```

pub mod core;
pub mod invariants;
pub mod keys;
pub mod machine;

// Re-export commonly used types
pub use self::core::{CalculatorState, Event, Guard, Operator, StateHistory, StateTransition};
pub use keys::{KeyError, KEYPAD};
pub use machine::{transition, Calculator};
