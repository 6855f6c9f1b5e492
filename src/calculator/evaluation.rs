//! Arithmetic and number formatting for the calculator.
//!
//! Every operation returns an explicit [`Evaluation`]; domain errors only
//! become the on-screen error marker when passed through
//! [`format_evaluation`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text shown on the display for any failed computation.
pub const ERROR_MARKER: &str = "Error";

/// Number of decimal places results are rounded to before display.
const DISPLAY_PRECISION: usize = 10;

/// A domain or arithmetic failure.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of a negative number")]
    NegativeSquareRoot,
    #[error("logarithm of a non-positive number")]
    NonPositiveLogarithm,
    #[error("inverse of zero")]
    ZeroInverse,
    #[error("result is not a finite number")]
    Overflow,
    #[error("display does not hold a number")]
    InvalidOperand,
}

/// Result of a single calculator computation.
pub type Evaluation = Result<f64, CalcError>;

/// A pending binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol used when showing a pending expression.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

/// Single-operand scientific functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Sqrt,
    Square,
    Inverse,
    Sine,
    Cosine,
    Tangent,
    Ln,
    Log10,
}

/// Unit used to interpret trigonometric arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Deg,
    Rad,
}

impl AngleMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Deg => Self::Rad,
            Self::Rad => Self::Deg,
        }
    }

    /// Label shown next to the display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Deg => "DEG",
            Self::Rad => "RAD",
        }
    }

    fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Deg => value.to_radians(),
            Self::Rad => value,
        }
    }
}

/// Apply a binary operator.
pub fn apply(a: f64, op: Operator, b: f64) -> Evaluation {
    let value = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
    };
    finite(value)
}

/// Apply a unary scientific function.
///
/// `mode` only matters for the trigonometric functions.
pub fn apply_unary(op: UnaryOp, x: f64, mode: AngleMode) -> Evaluation {
    let value = match op {
        UnaryOp::Sqrt => {
            if x < 0.0 {
                return Err(CalcError::NegativeSquareRoot);
            }
            x.sqrt()
        }
        UnaryOp::Square => x * x,
        UnaryOp::Inverse => {
            if x == 0.0 {
                return Err(CalcError::ZeroInverse);
            }
            1.0 / x
        }
        UnaryOp::Sine => mode.to_radians(x).sin(),
        UnaryOp::Cosine => mode.to_radians(x).cos(),
        UnaryOp::Tangent => mode.to_radians(x).tan(),
        UnaryOp::Ln | UnaryOp::Log10 if x <= 0.0 => {
            return Err(CalcError::NonPositiveLogarithm);
        }
        UnaryOp::Ln => x.ln(),
        UnaryOp::Log10 => x.log10(),
    };
    finite(value)
}

/// Parse display text into an operand.
pub fn parse_operand(text: &str) -> Evaluation {
    // Digits, dots and a leading minus only; `f64::from_str` alone would
    // also take "inf" and "NaN".
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(CalcError::InvalidOperand);
    }
    text.parse::<f64>()
        .map_err(|_| CalcError::InvalidOperand)
        .and_then(finite)
}

fn finite(value: f64) -> Evaluation {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Overflow)
    }
}

/// Format a number for the display.
///
/// Non-finite values become [`ERROR_MARKER`]. Finite values are rounded to
/// ten decimal places and printed in their shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_MARKER.to_string();
    }

    let fixed = format!("{:.*}", DISPLAY_PRECISION, value);
    let rounded: f64 = fixed.parse().unwrap_or(value);

    // Rounding can leave a negative zero behind (e.g. -1e-12)
    if rounded == 0.0 {
        return "0".to_string();
    }

    let formatted = rounded.to_string();
    match formatted.split_once('.') {
        Some((int_part, dec_part)) if dec_part.chars().all(|c| c == '0') => int_part.to_string(),
        _ => formatted,
    }
}

/// Format an evaluation, mapping any error to [`ERROR_MARKER`].
pub fn format_evaluation(evaluation: Evaluation) -> String {
    match evaluation {
        Ok(value) => format_number(value),
        Err(_) => ERROR_MARKER.to_string(),
    }
}
