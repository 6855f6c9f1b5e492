//! The calculator state machine.
//!
//! Key presses are folded into a running result against a single pending
//! operator. There is no precedence: choosing a new operator collapses the
//! pending one immediately, so `2 + 3 * 4` evaluates as `(2 + 3) * 4`.

use super::detection::Key;
use super::evaluation::{
    AngleMode, ERROR_MARKER, Evaluation, Operator, UnaryOp, apply, apply_unary, format_evaluation,
    format_number, parse_operand,
};
use crate::display::{DisplaySurface, TextDisplay};
use tracing::debug;

/// Behavior switches for a [`Calculator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalculatorOptions {
    /// Angle mode at startup.
    pub angle_mode: AngleMode,
    /// Maximum number of digits accepted while typing; `None` is unbounded.
    pub max_digits: Option<usize>,
    /// Whether `%` starts a fresh entry like the other unary keys.
    pub percent_resets_entry: bool,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Deg,
            max_digits: None,
            percent_resets_entry: false,
        }
    }
}

/// A calculator bound to a display surface.
#[derive(Debug)]
pub struct Calculator<D: DisplaySurface = TextDisplay> {
    display: D,
    first_operand: Option<Evaluation>,
    operator: Option<Operator>,
    /// Next digit starts a new number instead of appending.
    should_reset: bool,
    memory: f64,
    angle_mode: AngleMode,
    options: CalculatorOptions,
}

impl Default for Calculator<TextDisplay> {
    fn default() -> Self {
        Self::new(TextDisplay::new())
    }
}

impl<D: DisplaySurface> Calculator<D> {
    pub fn new(display: D) -> Self {
        Self::with_options(display, CalculatorOptions::default())
    }

    pub fn with_options(display: D, options: CalculatorOptions) -> Self {
        Self {
            display,
            first_operand: None,
            operator: None,
            should_reset: false,
            memory: 0.0,
            angle_mode: options.angle_mode,
            options,
        }
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        self.display.read()
    }

    pub fn display_surface(&self) -> &D {
        &self.display
    }

    /// Stored left-hand operand, if an operator is pending.
    pub fn first_operand(&self) -> Option<Evaluation> {
        self.first_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Whether the next digit replaces the display.
    pub fn awaiting_operand(&self) -> bool {
        self.should_reset
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Whether the display shows the error marker.
    pub fn is_error(&self) -> bool {
        self.display() == ERROR_MARKER
    }

    fn current_value(&self) -> Evaluation {
        parse_operand(self.display.read())
    }

    fn show(&mut self, evaluation: Evaluation) {
        if let Err(err) = evaluation {
            debug!(%err, "computation failed");
        }
        self.display.write(&format_evaluation(evaluation));
    }

    /// Dispatch a single key press.
    pub fn press(&mut self, key: Key) {
        debug!(?key, display = self.display(), "key press");
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Dot => self.input_dot(),
            Key::Clear => self.clear_all(),
            Key::MemoryClear => self.memory_clear(),
            Key::MemoryRecall => self.memory_recall(),
            Key::MemoryAdd => self.memory_add(),
            Key::MemorySubtract => self.memory_subtract(),
            Key::Unary(op) => self.apply_unary(op),
            Key::Pi => self.insert_pi(),
            Key::E => self.insert_e(),
            Key::AngleMode => self.toggle_angle_mode(),
            Key::Sign => self.toggle_sign(),
            Key::Percent => self.percent(),
            Key::Operator(op) => self.set_operator(op),
            Key::Equals => self.equals(),
        }
    }

    /// Type a digit (0-9).
    pub fn input_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };

        let current = self.display.read();
        if self.should_reset || current == "0" || current == ERROR_MARKER {
            self.display.write(ch.encode_utf8(&mut [0; 4]));
            self.should_reset = false;
            return;
        }

        if let Some(max) = self.options.max_digits {
            let typed = current.chars().filter(char::is_ascii_digit).count();
            if typed >= max {
                return;
            }
        }

        let mut next = current.to_string();
        next.push(ch);
        self.display.write(&next);
    }

    /// Type a decimal point.
    pub fn input_dot(&mut self) {
        let current = self.display.read();
        if self.should_reset || current == ERROR_MARKER {
            self.display.write("0.");
            self.should_reset = false;
            return;
        }
        if !current.contains('.') {
            let next = format!("{current}.");
            self.display.write(&next);
        }
    }

    /// Reset everything except memory and angle mode.
    pub fn clear_all(&mut self) {
        self.first_operand = None;
        self.operator = None;
        self.should_reset = false;
        self.display.write("0");
    }

    /// Choose a binary operator, collapsing any pending one first.
    pub fn set_operator(&mut self, next: Operator) {
        let current = self.current_value();

        match (self.operator, self.first_operand) {
            (Some(pending), Some(first)) if !self.should_reset => {
                let result = first.and_then(|a| current.and_then(|b| apply(a, pending, b)));
                debug!(?pending, ?result, "chained operation");
                self.show(result);
                self.first_operand = Some(result);
            }
            _ => self.first_operand = Some(current),
        }

        self.operator = Some(next);
        self.should_reset = true;
    }

    /// Complete the pending operation.
    pub fn equals(&mut self) {
        let (Some(op), Some(first)) = (self.operator, self.first_operand) else {
            return;
        };

        let second = self.current_value();
        let result = first.and_then(|a| second.and_then(|b| apply(a, op, b)));
        self.show(result);

        self.first_operand = None;
        self.operator = None;
        self.should_reset = true;
    }

    /// Add or remove a leading minus sign.
    pub fn toggle_sign(&mut self) {
        let current = self.display.read();
        if current == "0" || current == ERROR_MARKER {
            return;
        }
        let next = match current.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{current}"),
        };
        self.display.write(&next);
    }

    /// Divide the displayed value by 100.
    pub fn percent(&mut self) {
        let result = self.current_value().and_then(|x| apply(x, Operator::Divide, 100.0));
        self.show(result);
        if self.options.percent_resets_entry {
            self.should_reset = true;
        }
    }

    /// Apply a scientific function to the displayed value.
    pub fn apply_unary(&mut self, op: UnaryOp) {
        let mode = self.angle_mode;
        let result = self.current_value().and_then(|x| apply_unary(op, x, mode));
        self.show(result);
        self.should_reset = true;
    }

    pub fn sqrt(&mut self) {
        self.apply_unary(UnaryOp::Sqrt);
    }

    pub fn square(&mut self) {
        self.apply_unary(UnaryOp::Square);
    }

    pub fn inverse(&mut self) {
        self.apply_unary(UnaryOp::Inverse);
    }

    pub fn sine(&mut self) {
        self.apply_unary(UnaryOp::Sine);
    }

    pub fn cosine(&mut self) {
        self.apply_unary(UnaryOp::Cosine);
    }

    pub fn tangent(&mut self) {
        self.apply_unary(UnaryOp::Tangent);
    }

    pub fn ln(&mut self) {
        self.apply_unary(UnaryOp::Ln);
    }

    pub fn log10(&mut self) {
        self.apply_unary(UnaryOp::Log10);
    }

    pub fn insert_pi(&mut self) {
        self.insert_constant(std::f64::consts::PI);
    }

    pub fn insert_e(&mut self) {
        self.insert_constant(std::f64::consts::E);
    }

    fn insert_constant(&mut self, value: f64) {
        self.display.write(&format_number(value));
        self.should_reset = true;
    }

    /// Switch between degrees and radians for trig keys.
    pub fn toggle_angle_mode(&mut self) {
        self.angle_mode = self.angle_mode.toggled();
        debug!(mode = self.angle_mode.label(), "angle mode changed");
    }

    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    pub fn memory_recall(&mut self) {
        self.display.write(&format_number(self.memory));
        self.should_reset = true;
    }

    /// Add the displayed value to memory; an error display counts as 0.
    pub fn memory_add(&mut self) {
        self.memory += self.current_value().unwrap_or(0.0);
    }

    /// Subtract the displayed value from memory; an error display counts as 0.
    pub fn memory_subtract(&mut self) {
        self.memory -= self.current_value().unwrap_or(0.0);
    }
}
