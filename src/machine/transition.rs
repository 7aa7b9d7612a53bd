//! The calculator reducer.
//!
//! `transition` is a total function: every `(state, event)` pair yields a
//! state. Events whose guard fails return the input state unchanged.

use crate::core::{display_for, CalculatorState, Event, Guard, Operator, ERROR_DISPLAY};

/// Precondition for `event`.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{CalculatorState, Event, Operator};
/// use calcpad::machine::guard_for;
///
/// let guard = guard_for(&Event::Operator(Operator::Add));
/// assert!(!guard.check(&CalculatorState::new()));
/// ```
pub fn guard_for(event: &Event) -> Guard<CalculatorState> {
    let event = *event;
    Guard::new(move |s: &CalculatorState| can_apply(s, &event))
}

/// Whether `event` passes its guard in `state`.
///
/// A failing guard means the key press would be ignored; a presentation
/// layer may use this to dim the key.
pub fn can_apply(state: &CalculatorState, event: &Event) -> bool {
    match *event {
        Event::Digit(d) => d <= 9,
        Event::Decimal => !state.active_operand().contains('.'),
        Event::Operator(_) => !state.operand1.trim().is_empty(),
        Event::Equals => pending_calculation(state).is_some(),
        Event::Backspace | Event::ClearAll => true,
    }
}

/// Apply one key press, returning the next state.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{CalculatorState, Event, Operator};
/// use calcpad::machine::transition;
///
/// let events = [
///     Event::Digit(3),
///     Event::Operator(Operator::Add),
///     Event::Digit(4),
///     Event::Equals,
/// ];
/// let state = events
///     .into_iter()
///     .fold(CalculatorState::new(), |s, e| transition(&s, e));
///
/// assert_eq!(state.display, "7");
/// assert_eq!(state.operand1, "7");
/// assert!(state.operator.is_none());
/// ```
pub fn transition(state: &CalculatorState, event: Event) -> CalculatorState {
    match event {
        // `equals` checks its own precondition while parsing the operands.
        Event::Equals => equals(state),
        _ if !can_apply(state, &event) => state.clone(),
        Event::Digit(d) => append(state, char::from(b'0' + d)),
        Event::Decimal => append(state, '.'),
        Event::Operator(op) => CalculatorState {
            operator: Some(op),
            ..state.clone()
        },
        Event::Backspace => backspace(state),
        Event::ClearAll => CalculatorState::new(),
    }
}

/// Apply `op` to two numbers.
///
/// Division by zero yields NaN.
pub fn evaluate(op: Operator, n1: f64, n2: f64) -> f64 {
    match op {
        Operator::Add => n1 + n2,
        Operator::Subtract => n1 - n2,
        Operator::Multiply => n1 * n2,
        Operator::Divide => {
            if n2 != 0.0 {
                n1 / n2
            } else {
                f64::NAN
            }
        }
    }
}

/// Canonical decimal text for a result, without a trailing `.0`.
///
/// ```rust
/// use calcpad::machine::format_result;
///
/// assert_eq!(format_result(4.0), "4");
/// assert_eq!(format_result(3.5), "3.5");
/// assert_eq!(format_result(-2.0), "-2");
/// ```
pub fn format_result(value: f64) -> String {
    let text = value.to_string();
    text.strip_suffix(".0").unwrap_or(&text).to_string()
}

fn append(state: &CalculatorState, ch: char) -> CalculatorState {
    let mut next = state.clone();
    let operand = if next.operator.is_none() {
        &mut next.operand1
    } else {
        &mut next.operand2
    };
    operand.push(ch);
    let display = operand.clone();
    next.display = display;
    next
}

fn equals(state: &CalculatorState) -> CalculatorState {
    let Some((n1, op, n2)) = pending_calculation(state) else {
        return state.clone();
    };

    let result = evaluate(op, n1, n2);
    // Infinity would leave a non-numeric first operand behind.
    if result.is_finite() {
        let formatted = format_result(result);
        CalculatorState {
            operand1: formatted.clone(),
            operand2: String::new(),
            operator: None,
            display: formatted,
        }
    } else {
        CalculatorState {
            operand1: String::new(),
            operand2: String::new(),
            operator: None,
            display: ERROR_DISPLAY.to_string(),
        }
    }
}

fn backspace(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    if next.operator.is_none() {
        next.operand1.pop();
        next.display = display_for(&next.operand1);
    } else if !next.operand2.trim().is_empty() {
        next.operand2.pop();
        next.display = display_for(&next.operand2);
    } else {
        next.operator = None;
        next.display = next.operand1.clone();
    }
    next
}

fn pending_calculation(state: &CalculatorState) -> Option<(f64, Operator, f64)> {
    let op = state.operator?;
    let n1 = parse_operand(&state.operand1)?;
    let n2 = parse_operand(&state.operand2)?;
    Some((n1, op, n2))
}

fn parse_operand(operand: &str) -> Option<f64> {
    operand.parse::<f64>().ok().filter(|n| n.is_finite())
}
