//! A key-driven scientific calculator.
//!
//! [`calculator::Calculator`] folds key presses into a running result shown
//! on a [`display::DisplaySurface`]; operators chain strictly left to right.

pub mod calculator;
pub mod config;
pub mod display;
pub mod ui;
