//! Scientific Calculator
//!
//! The calculator front end: a 57-button keypad, an editable expression, a
//! one-value memory register and a small panel state machine (main, help,
//! cut; normal or minimized). Arithmetic is delegated to an [`Evaluator`].
//!
//! Two front ends share one [`InputController`]:
//!
//! - `tui`: a ratatui terminal app (default feature, `scicalc` binary)
//! - `web`: a mock DOM presenter, plus `wasm-bindgen` bindings behind the
//!   `wasm` feature
//!
//! # Example
//!
//! ```rust
//! use scientific_calculator::prelude::*;
//!
//! let mut buffer = ExpressionBuffer::new();
//! buffer.append("50");
//! buffer.append("%");
//! assert_eq!(buffer.normalize(), "50*0.01");
//!
//! let value = buffer.evaluate(&MathEvaluator::new()).unwrap();
//! assert_eq!(value, 0.5);
//! ```
//!
//! [`Evaluator`]: core::Evaluator
//! [`InputController`]: controller::InputController

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod driver;
pub mod keypad;
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser front end - always available for testing
/// (the mock DOM runs natively; bindings need the `wasm` feature)
pub mod web;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError};
    pub use crate::controller::{ControllerSnapshot, InputController, Presenter};
    pub use crate::core::{
        format_number, CalcError, CalcResult, Evaluator, ExpressionBuffer, MathEvaluator,
        MemoryRegister, Panel, SizeMode, UiState,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{KeypadAction, KeypadButtonDef, MemoryAction};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::web::{DomDriver, DomElement, DomEvent, MockDom};

    #[cfg(feature = "wasm")]
    pub use crate::web::BrowserCalculator;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_wires_controller() {
        let mut controller = InputController::new(
            MathEvaluator::new(),
            MockDom::calculator(),
            CalculatorConfig::default(),
        );
        for id in ["two", "power", "one", "zero", "ans"] {
            controller.press(id);
        }
        assert_eq!(controller.expression(), "2^10");
        assert_eq!(controller.result(), "1024");
    }

    #[test]
    fn test_dom_driver_from_prelude() {
        let mut driver = DomDriver::new();
        driver.type_text("3*(4+5)");
        driver.type_key("Enter");
        assert_eq!(driver.result(), "27");
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_tui_driver_from_prelude() {
        let mut driver = TuiDriver::new();
        driver.type_text("3*(4+5)");
        driver.type_key("Enter");
        assert_eq!(driver.result(), "27");
    }
}
