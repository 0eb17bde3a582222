//! Terminal front end

mod app;
mod input;
mod keypad;
mod ui;

pub use app::{CalculatorApp, Screen};
pub use input::{InputHandler, KeyAction};
pub use keypad::{hit_test, KeypadWidget};
pub use ui::{calculator_area, keypad_area, render, CalculatorUI};
