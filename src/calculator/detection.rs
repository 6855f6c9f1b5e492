//! Key detection for the calculator.
//!
//! Maps button action names, keyboard keys and free-form key scripts
//! (`"2+3*4="`, `"9 sqrt sign"`) onto calculator keys.

use super::evaluation::{Operator, UnaryOp};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// A single calculator key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Dot,
    Clear,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
    Unary(UnaryOp),
    Pi,
    E,
    AngleMode,
    Sign,
    Percent,
    Operator(Operator),
    Equals,
}

/// Button action names, in keypad order.
pub const ACTION_NAMES: &[&str] = &[
    "dot", "clear", "mc", "mr", "mplus", "mminus", "sqrt", "square", "inv", "sin", "cos", "tan",
    "ln", "log10", "pi", "exp", "deg-rad", "sign", "percent", "add", "subtract", "multiply",
    "divide", "equals",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

lazy_static! {
    /// One key per match: a single symbol or digit, or a word naming an action.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"[0-9]|[.+\-*/=]|[A-Za-z][A-Za-z0-9]*(?:-[A-Za-z]+)*|\S"
    ).unwrap();
}

impl Key {
    /// Resolve a button action name (`"mplus"`, `"deg-rad"`, ...) or a digit.
    pub fn from_action(name: &str) -> Option<Self> {
        if let Some(digit) = single_digit(name) {
            return Some(Self::Digit(digit));
        }

        let key = match name {
            "dot" => Self::Dot,
            "clear" => Self::Clear,
            "mc" => Self::MemoryClear,
            "mr" => Self::MemoryRecall,
            "mplus" => Self::MemoryAdd,
            "mminus" => Self::MemorySubtract,
            "sqrt" => Self::Unary(UnaryOp::Sqrt),
            "square" => Self::Unary(UnaryOp::Square),
            "inv" => Self::Unary(UnaryOp::Inverse),
            "sin" => Self::Unary(UnaryOp::Sine),
            "cos" => Self::Unary(UnaryOp::Cosine),
            "tan" => Self::Unary(UnaryOp::Tangent),
            "ln" => Self::Unary(UnaryOp::Ln),
            "log10" => Self::Unary(UnaryOp::Log10),
            "pi" => Self::Pi,
            "exp" => Self::E,
            "deg-rad" => Self::AngleMode,
            "sign" => Self::Sign,
            "percent" => Self::Percent,
            "add" => Self::Operator(Operator::Add),
            "subtract" => Self::Operator(Operator::Subtract),
            "multiply" => Self::Operator(Operator::Multiply),
            "divide" => Self::Operator(Operator::Divide),
            "equals" => Self::Equals,
            _ => return None,
        };
        Some(key)
    }

    /// Resolve a physical keyboard key. Anything unmapped is ignored.
    pub fn from_keyboard(key: &str) -> Option<Self> {
        if let Some(digit) = single_digit(key) {
            return Some(Self::Digit(digit));
        }

        match key {
            "." => Some(Self::Dot),
            "+" => Some(Self::Operator(Operator::Add)),
            "-" => Some(Self::Operator(Operator::Subtract)),
            "*" => Some(Self::Operator(Operator::Multiply)),
            "/" => Some(Self::Operator(Operator::Divide)),
            "Enter" | "=" => Some(Self::Equals),
            "Escape" => Some(Self::Clear),
            _ => None,
        }
    }
}

fn single_digit(text: &str) -> Option<u8> {
    match text.as_bytes() {
        [b @ b'0'..=b'9'] => Some(b - b'0'),
        _ => None,
    }
}

/// Resolve one script token: keyboard keys first, then action names.
fn resolve_token(token: &str) -> Option<Key> {
    Key::from_keyboard(token).or_else(|| {
        let lower = token.to_ascii_lowercase();
        match lower.as_str() {
            "enter" => Some(Key::Equals),
            "escape" | "esc" => Some(Key::Clear),
            name => Key::from_action(name),
        }
    })
}

/// Split a key script into keys.
///
/// Digits and symbols may be packed together (`12.5*2=`); action names must
/// be separated from following letters by whitespace or a symbol.
pub fn parse_keys(script: &str) -> Result<Vec<Key>, KeyError> {
    KEY_TOKEN
        .find_iter(script)
        .map(|m| resolve_token(m.as_str()).ok_or_else(|| KeyError::UnknownKey(m.as_str().into())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_action_name_resolves() {
        for name in ACTION_NAMES {
            assert!(Key::from_action(name).is_some(), "{name} not mapped");
        }
        for digit in 0..=9u8 {
            assert_eq!(
                Key::from_action(&digit.to_string()),
                Some(Key::Digit(digit))
            );
        }
        assert_eq!(Key::from_action("bogus"), None);
        assert_eq!(Key::from_action("10"), None);
    }

    #[test]
    fn test_keyboard_mapping() {
        assert_eq!(Key::from_keyboard("7"), Some(Key::Digit(7)));
        assert_eq!(Key::from_keyboard("."), Some(Key::Dot));
        assert_eq!(
            Key::from_keyboard("*"),
            Some(Key::Operator(Operator::Multiply))
        );
        assert_eq!(Key::from_keyboard("Enter"), Some(Key::Equals));
        assert_eq!(Key::from_keyboard("="), Some(Key::Equals));
        assert_eq!(Key::from_keyboard("Escape"), Some(Key::Clear));
        assert_eq!(Key::from_keyboard("%"), None);
        assert_eq!(Key::from_keyboard("a"), None);
    }

    #[test]
    fn test_packed_script() {
        let keys = parse_keys("12.5*2=").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(1),
                Key::Digit(2),
                Key::Dot,
                Key::Digit(5),
                Key::Operator(Operator::Multiply),
                Key::Digit(2),
                Key::Equals,
            ]
        );
    }

    #[test]
    fn test_named_script() {
        let keys = parse_keys("9 sqrt sign deg-rad log10 Enter").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(9),
                Key::Unary(UnaryOp::Sqrt),
                Key::Sign,
                Key::AngleMode,
                Key::Unary(UnaryOp::Log10),
                Key::Equals,
            ]
        );
    }

    #[test]
    fn test_words_next_to_digits() {
        let keys = parse_keys("2pi").unwrap();
        assert_eq!(keys, vec![Key::Digit(2), Key::Pi]);
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        assert_eq!(
            parse_keys("2 + foo"),
            Err(KeyError::UnknownKey("foo".to_string()))
        );
        assert_eq!(
            parse_keys("2 % 3"),
            Err(KeyError::UnknownKey("%".to_string()))
        );
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(parse_keys("   "), Ok(vec![]));
    }
}
