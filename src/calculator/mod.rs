//! Calculator module.
//!
//! This module provides functionality to:
//! - Fold key presses into a running result (`Calculator`)
//! - Apply operators and scientific functions, and format results
//! - Map action names, keyboard keys and key scripts onto keys
//! - Copy results to the clipboard

mod clipboard;
mod detection;
mod evaluation;
mod snapshot;
mod state;

pub use clipboard::copy_to_clipboard;
pub use detection::{ACTION_NAMES, Key, KeyError, parse_keys};
pub use evaluation::{
    AngleMode, CalcError, ERROR_MARKER, Evaluation, Operator, UnaryOp, apply, apply_unary,
    format_evaluation, format_number, parse_operand,
};
pub use snapshot::CalculatorSnapshot;
pub use state::{Calculator, CalculatorOptions};
