//! Input events accepted by the calculator.

use super::state::Operator;
use serde::{Deserialize, Serialize};

/// One key press.
///
/// Every key on the pad maps to exactly one event; the reducer consumes
/// them one at a time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Event {
    /// A decimal digit, `0..=9`
    Digit(u8),
    /// The `.` key
    Decimal,
    /// One of `+ − × ÷`
    Operator(Operator),
    /// The `=` key
    Equals,
    /// The `C` key: delete one character or drop the pending operator
    Backspace,
    /// The `AC` key
    ClearAll,
}

impl Event {
    /// Digit event for `d`, or `None` when `d` is not a single decimal digit.
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self::Digit(d))
    }

    /// Name of the event, for diagnostics.
    pub fn name(&self) -> &str {
        match self {
            Self::Digit(_) => "Digit",
            Self::Decimal => "Decimal",
            Self::Operator(_) => "Operator",
            Self::Equals => "Equals",
            Self::Backspace => "Backspace",
            Self::ClearAll => "ClearAll",
        }
    }
}
