//! Unified calculator driver
//!
//! Behavior is written once, as functions generic over
//! [`CalculatorDriver`], and run against every front end: the mock DOM that
//! backs the browser bridge and the terminal application.

use crate::config::CalculatorConfig;
use crate::controller::{KEY_BACKSPACE, KEY_ENTER};
use crate::core::{Panel, SizeMode, UiState};

/// Abstract driver for calculator interactions
///
/// ```rust,ignore
/// fn verify_sum<D: CalculatorDriver>(driver: &mut D) {
///     driver.press_all(&["two", "add", "two", "ans"]);
///     assert_eq!(driver.result(), "4");
/// }
///
/// verify_sum(&mut DomDriver::new());
/// verify_sum(&mut TuiDriver::new());
/// ```
pub trait CalculatorDriver {
    /// Activates a button by element id
    fn press(&mut self, id: &str) -> bool;

    /// Presses a named key (`"7"`, `"Enter"`, `"Backspace"`)
    fn type_key(&mut self, key: &str) -> bool;

    /// Returns the displayed expression
    fn expression(&self) -> String;

    /// Returns the displayed result
    fn result(&self) -> String;

    /// Returns the panel and size state
    fn view(&self) -> UiState;

    /// Returns the memory register value
    fn memory(&self) -> f64;

    /// Activates several buttons in order.
    ///
    /// # Panics
    ///
    /// Panics if a button is unknown or unreachable, naming its id.
    fn press_all(&mut self, ids: &[&str]) {
        for id in ids {
            assert!(self.press(id), "button {id} rejected");
        }
    }

    /// Types every character of `text`
    fn type_text(&mut self, text: &str) {
        let mut buf = [0u8; 4];
        for c in text.chars() {
            self.type_key(c.encode_utf8(&mut buf));
        }
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::UiState;
    use crate::tui::CalculatorApp;

    /// Driver wrapping the terminal application
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, id: &str) -> bool {
            self.app.press(id)
        }

        fn type_key(&mut self, key: &str) -> bool {
            self.app.type_key(key)
        }

        fn expression(&self) -> String {
            self.app.screen().expression.clone()
        }

        fn result(&self) -> String {
            self.app.screen().result.clone()
        }

        fn view(&self) -> UiState {
            self.app.screen().view
        }

        fn memory(&self) -> f64 {
            self.app.controller().memory()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared behavior checks =====
// Each one starts and ends on the main panel with a cleared expression.

fn reset<D: CalculatorDriver>(driver: &mut D) {
    driver.press("clearComplete");
}

fn evaluate_buttons<D: CalculatorDriver>(driver: &mut D, ids: &[&str]) -> String {
    reset(driver);
    driver.press_all(ids);
    driver.press("ans");
    driver.result()
}

fn evaluate_typed<D: CalculatorDriver>(driver: &mut D, text: &str) -> String {
    reset(driver);
    driver.type_text(text);
    driver.type_key(KEY_ENTER);
    driver.result()
}

/// Verifies the four operations and precedence
pub fn verify_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(evaluate_buttons(driver, &["two", "add", "three"]), "5");
    assert_eq!(evaluate_buttons(driver, &["one", "zero", "sub", "fourth"]), "6");
    assert_eq!(evaluate_buttons(driver, &["six", "mul", "seven"]), "42");
    assert_eq!(evaluate_buttons(driver, &["two", "zero", "div", "fourth"]), "5");
    assert_eq!(
        evaluate_buttons(driver, &["two", "add", "three", "mul", "fourth"]),
        "14"
    );
    assert_eq!(evaluate_typed(driver, "(2+3)*4"), "20");
    assert_eq!(evaluate_typed(driver, "0.5+0.25"), "0.75");
    reset(driver);
}

/// Verifies function, constant and power buttons
pub fn verify_scientific_functions<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(
        evaluate_buttons(driver, &["sqrt", "one", "six", "closeParenthesis"]),
        "4"
    );
    assert_eq!(
        evaluate_buttons(driver, &["cbroot", "two", "seven", "closeParenthesis"]),
        "3"
    );
    assert_eq!(
        evaluate_buttons(driver, &["fact", "five", "closeParenthesis"]),
        "120"
    );
    assert_eq!(
        evaluate_buttons(driver, &["log", "one", "zero", "zero", "closeParenthesis"]),
        "2"
    );
    assert_eq!(
        evaluate_buttons(driver, &["log2", "eight", "closeParenthesis"]),
        "3"
    );
    assert_eq!(
        evaluate_buttons(driver, &["ln", "EulerNumber", "closeParenthesis"]),
        "1"
    );
    assert_eq!(
        evaluate_buttons(driver, &["abs", "sub", "three", "closeParenthesis"]),
        "3"
    );
    assert_eq!(evaluate_buttons(driver, &["three", "square"]), "9");
    assert_eq!(evaluate_buttons(driver, &["two", "cube"]), "8");
    assert_eq!(evaluate_buttons(driver, &["two", "power", "five"]), "32");
    assert_eq!(evaluate_buttons(driver, &["tenPower", "three"]), "1000");
    assert_eq!(evaluate_buttons(driver, &["reverse", "fourth"]), "0.25");
    assert_eq!(evaluate_buttons(driver, &["two", "Exp", "three"]), "2000");
    assert_eq!(evaluate_buttons(driver, &["pi"]), "3.1415926536");
    reset(driver);
}

/// Verifies the `π`, `%` and `mod` display markers
pub fn verify_markers<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.press("pi");
    assert_eq!(driver.expression(), "π");

    assert_eq!(evaluate_buttons(driver, &["five", "zero", "rem"]), "0.5");
    assert_eq!(evaluate_buttons(driver, &["seven", "mod", "three"]), "1");
    assert_eq!(evaluate_typed(driver, "17mod5"), "2");

    // Implicit multiplication and postfix factorial
    assert_eq!(evaluate_buttons(driver, &["two", "pi"]), "6.2831853072");
    assert_eq!(evaluate_typed(driver, "5!"), "120");
    assert_eq!(evaluate_typed(driver, "5m"), CalculatorConfig::DEFAULT_ERROR_MESSAGE);
    reset(driver);
}

/// Verifies that failures show the configured message and keep the input
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    let message = CalculatorConfig::DEFAULT_ERROR_MESSAGE;

    assert_eq!(evaluate_typed(driver, "3*(4+5"), message);
    assert_eq!(driver.expression(), "3*(4+5");

    assert_eq!(evaluate_buttons(driver, &["two", "add"]), message);
    assert_eq!(evaluate_buttons(driver, &["one", "div", "zero"]), message);

    // Fixing the input recovers
    driver.press("lastCharDelete");
    driver.press("two");
    driver.press("ans");
    assert_eq!(driver.result(), "0.5");

    // Nothing to evaluate clears the result
    reset(driver);
    driver.press("ans");
    assert_eq!(driver.result(), "");
}

/// Verifies deletion with eager re-evaluation
pub fn verify_delete<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.press_all(&["one", "two", "add", "three", "fourth"]);
    driver.press("lastCharDelete");
    assert_eq!(driver.expression(), "12+3");
    assert_eq!(driver.result(), "15");

    driver.type_key(KEY_BACKSPACE);
    assert_eq!(driver.expression(), "12+");
    assert_eq!(driver.result(), CalculatorConfig::DEFAULT_ERROR_MESSAGE);

    driver.press_all(&["lastCharDelete", "lastCharDelete", "lastCharDelete"]);
    assert_eq!(driver.expression(), "");
    assert_eq!(driver.result(), "");

    // Deleting from an empty expression is harmless
    driver.press("lastCharDelete");
    assert_eq!(driver.expression(), "");

    driver.press("pi");
    driver.press("lastCharDelete");
    assert_eq!(driver.expression(), "");
    reset(driver);
}

/// Verifies MS, M+, M-, MR and MC
pub fn verify_memory<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.press("MC");
    assert_eq!(driver.memory(), 0.0);

    driver.press_all(&["five", "MS"]);
    assert_eq!(driver.memory(), 5.0);

    reset(driver);
    driver.press_all(&["three", "M+"]);
    assert_eq!(driver.memory(), 8.0);

    reset(driver);
    driver.press_all(&["one", "zero", "M-"]);
    assert_eq!(driver.memory(), -2.0);

    driver.press("MR");
    assert_eq!(driver.expression(), "-2");

    // An invalid expression leaves the register alone
    reset(driver);
    driver.press_all(&["two", "mul", "M+"]);
    assert_eq!(driver.memory(), -2.0);
    assert_eq!(driver.result(), CalculatorConfig::DEFAULT_ERROR_MESSAGE);

    driver.press("MC");
    assert_eq!(driver.memory(), 0.0);
    reset(driver);
}

/// Verifies help, cut, back and minimise
pub fn verify_panels<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    assert_eq!(driver.view().panel(), Panel::Main);

    for _ in 0..3 {
        assert!(driver.press("help"));
        assert_eq!(driver.view().panel(), Panel::Help);
        assert!(driver.view().back_visible());
        // Keypad is unreachable under the help text
        assert!(!driver.press("one"));
        assert!(!driver.press("cut"));
        assert!(driver.press("back"));
        assert_eq!(driver.view().panel(), Panel::Main);
    }

    assert!(driver.press("cut"));
    assert_eq!(driver.view().panel(), Panel::Cut);
    assert!(!driver.press("help"));
    assert!(driver.press("back"));
    assert!(driver.view().is_main_visible());
    assert!(!driver.press("back"));
    assert_eq!(driver.expression(), "");

    let size = driver.view().size();
    driver.press("minimise");
    assert_eq!(driver.view().size(), size.toggled());
    driver.press("minimise");
    assert_eq!(driver.view().size(), size);
    if size == SizeMode::Normal {
        assert!(!driver.view().is_minimized());
    }
}

/// Verifies keyboard entry
pub fn verify_keyboard<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(evaluate_typed(driver, "4*(2+1)"), "12");
    assert_eq!(evaluate_typed(driver, "sqrt(81)"), "9");
    assert_eq!(evaluate_typed(driver, "2^10"), "1024");

    // Keys off the allow-list are dropped
    reset(driver);
    assert!(!driver.type_key("="));
    assert!(!driver.type_key("Tab"));
    assert!(!driver.type_key("A"));
    assert_eq!(driver.expression(), "");

    // and so is everything while help is open
    driver.press("help");
    assert!(!driver.type_key("1"));
    assert!(!driver.type_key(KEY_ENTER));
    driver.press("back");
    assert_eq!(driver.expression(), "");
}

/// Complete verification suite
pub fn run_behavior_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_arithmetic(driver);
    verify_scientific_functions(driver);
    verify_markers(driver);
    verify_error_handling(driver);
    verify_delete(driver);
    verify_memory(driver);
    verify_panels(driver);
    verify_keyboard(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::*;
        use crate::tui::CalculatorApp;

        #[test]
        fn test_tui_driver_new() {
            let driver = TuiDriver::new();
            assert!(driver.expression().is_empty());
            assert!(driver.view().is_main_visible());
        }

        #[test]
        fn test_tui_driver_with_app() {
            let app = CalculatorApp::with_config(
                CalculatorConfig::default().with_start_minimized(true),
            );
            let driver = TuiDriver::with_app(app);
            assert!(driver.view().is_minimized());
            assert!(driver.app().pressed().is_none());
        }

        #[test]
        fn test_tui_driver_type_text() {
            let mut driver = TuiDriver::new();
            driver.type_text("1+1");
            assert_eq!(driver.expression(), "1+1");
        }

        // ===== Shared behavior tests =====

        #[test]
        fn test_unified_arithmetic() {
            verify_arithmetic(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_scientific_functions() {
            verify_scientific_functions(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_markers() {
            verify_markers(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_error_handling() {
            verify_error_handling(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_delete() {
            verify_delete(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_memory() {
            verify_memory(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_panels() {
            verify_panels(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_keyboard() {
            verify_keyboard(&mut TuiDriver::new());
        }

        #[test]
        fn test_behavior_suite() {
            run_behavior_suite(&mut TuiDriver::new());
        }

        #[test]
        fn test_behavior_suite_minimized() {
            let app = CalculatorApp::with_config(
                CalculatorConfig::default().with_start_minimized(true),
            );
            run_behavior_suite(&mut TuiDriver::with_app(app));
        }
    }
}
