//! Calculator panel rendering.
//!
//! Renders the calculator as two right-aligned text rows:
//! - An indicator row with the angle mode, a memory flag and the pending expression
//! - The display with a "= " prefix ("! " when showing an error)

use crate::calculator::CalculatorSnapshot;

/// Narrowest panel that still fits the indicators.
const MIN_WIDTH: usize = 12;

/// Render a snapshot as a text panel `width` columns wide.
///
/// Content wider than the panel is never truncated; the panel grows instead.
pub fn render_panel(snapshot: &CalculatorSnapshot, width: usize) -> String {
    let width = width.max(MIN_WIDTH);

    let memory_flag = if snapshot.has_memory() { "M" } else { " " };
    let indicators = format!("{} {}", snapshot.angle_mode.label(), memory_flag);
    let expression = snapshot.pending_expression().unwrap_or_default();

    let prefix = if snapshot.is_error { "! " } else { "= " };
    let result = format!("{}{}", prefix, snapshot.display);

    let status_row = spread(&indicators, &expression, width);
    let result_row = format!("{:>width$}", result);
    let rule = "─".repeat(status_row.chars().count().max(result_row.chars().count()));

    format!("{rule}\n{status_row}\n{result_row}\n{rule}")
}

/// Left-align `left` and right-align `right` on one row.
fn spread(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = width.saturating_sub(used).max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Calculator, parse_keys};

    fn render_after(script: &str, width: usize) -> String {
        let mut calc = Calculator::default();
        for key in parse_keys(script).unwrap() {
            calc.press(key);
        }
        render_panel(&CalculatorSnapshot::capture(&calc), width)
    }

    #[test]
    fn test_idle_panel() {
        let panel = render_after("", 16);
        let rows: Vec<&str> = panel.lines().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].trim_end(), "DEG");
        assert_eq!(rows[2], "             = 0");
    }

    #[test]
    fn test_pending_expression_and_memory() {
        let panel = render_after("7 mplus deg-rad * 2", 20);
        let rows: Vec<&str> = panel.lines().collect();
        assert!(rows[1].starts_with("RAD M"));
        assert!(rows[1].ends_with("7 ×"));
        assert!(rows[2].ends_with("= 2"));
    }

    #[test]
    fn test_error_prefix() {
        let panel = render_after("0 inv", 16);
        assert!(panel.lines().nth(2).unwrap().ends_with("! Error"));
    }

    #[test]
    fn test_long_display_is_not_truncated() {
        let panel = render_after("123456789012345678901234567890", 12);
        assert!(panel.contains("= 123456789012345678901234567890"));
    }
}
