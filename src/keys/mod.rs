//! Keypad labels.
//!
//! The presentation layer talks to the core through key labels: `0`-`9`,
//! `.`, `+`, `−`, `×`, `÷`, `=`, `AC` and `C`. This module maps labels to
//! events and back.

pub mod error;

pub use error::KeyError;

use crate::core::{Event, Operator};
use std::fmt;
use std::str::FromStr;

/// Keys in grid order: four rows of four, then `AC` and `C`.
pub const KEYPAD: [&str; 18] = [
    "7", "8", "9", "÷", //
    "4", "5", "6", "×", //
    "1", "2", "3", "−", //
    "0", ".", "=", "+", //
    "AC", "C",
];

impl FromStr for Operator {
    type Err = KeyError;

    /// Accepts the key symbols and the ASCII stand-ins `-`, `*`, `x`, `/`.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim() {
            "" => Err(KeyError::Empty),
            "+" => Ok(Self::Add),
            "−" | "-" => Ok(Self::Subtract),
            "×" | "*" | "x" | "X" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            other => Err(KeyError::UnknownKey(other.to_string())),
        }
    }
}

impl FromStr for Event {
    type Err = KeyError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();
        match label {
            "" => Err(KeyError::Empty),
            "." => Ok(Self::Decimal),
            "=" => Ok(Self::Equals),
            "AC" | "ac" => Ok(Self::ClearAll),
            "C" | "c" => Ok(Self::Backspace),
            _ => {
                if let [d @ b'0'..=b'9'] = label.as_bytes() {
                    return Ok(Self::Digit(d - b'0'));
                }
                label.parse::<Operator>().map(Self::Operator)
            }
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => f.write_str("."),
            Self::Operator(op) => f.write_str(op.symbol()),
            Self::Equals => f.write_str("="),
            Self::Backspace => f.write_str("C"),
            Self::ClearAll => f.write_str("AC"),
        }
    }
}

/// Read a run of keys such as `"12.5 × 4 ="` or `"9C AC 3"`.
///
/// Whitespace is skipped. `AC` is read before `C`.
pub fn parse_sequence(input: &str) -> Result<Vec<Event>, KeyError> {
    let mut events: Vec<Event> = Vec::new();
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }
        if matches!(ch, 'A' | 'a') {
            match chars.next() {
                Some(next @ ('C' | 'c')) => {
                    events.push(format!("{ch}{next}").parse::<Event>()?);
                    continue;
                }
                Some(next) => return Err(KeyError::UnknownKey(format!("{ch}{next}"))),
                None => return Err(KeyError::UnknownKey(ch.to_string())),
            }
        }
        events.push(ch.to_string().parse::<Event>()?);
    }

    Ok(events)
}
