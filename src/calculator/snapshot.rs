//! Serializable view of a calculator's state.

use super::evaluation::{AngleMode, Operator, format_evaluation};
use super::state::Calculator;
use crate::display::DisplaySurface;
use serde::Serialize;

/// A point-in-time copy of everything a front end needs to draw.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorSnapshot {
    /// Text on the display.
    pub display: String,
    /// Formatted left-hand operand while an operator is pending.
    pub first_operand: Option<String>,
    pub operator: Option<Operator>,
    /// Whether the next digit starts a fresh number.
    pub awaiting_operand: bool,
    pub memory: f64,
    pub angle_mode: AngleMode,
    /// Whether the display shows the error marker.
    pub is_error: bool,
}

impl CalculatorSnapshot {
    pub fn capture<D: DisplaySurface>(calc: &Calculator<D>) -> Self {
        Self {
            display: calc.display().to_string(),
            first_operand: calc.first_operand().map(format_evaluation),
            operator: calc.pending_operator(),
            awaiting_operand: calc.awaiting_operand(),
            memory: calc.memory(),
            angle_mode: calc.angle_mode(),
            is_error: calc.is_error(),
        }
    }

    /// The pending expression, e.g. `"5 ×"`, if an operator is pending.
    pub fn pending_expression(&self) -> Option<String> {
        match (&self.first_operand, self.operator) {
            (Some(first), Some(op)) => Some(format!("{} {}", first, op.symbol())),
            _ => None,
        }
    }

    /// Whether the memory indicator should be lit.
    pub fn has_memory(&self) -> bool {
        self.memory != 0.0
    }
}
