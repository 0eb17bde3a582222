//! DOM driver
//!
//! Runs the shared behavior checks against the controller wired to a
//! [`MockDom`]. Reads go through the DOM, so a test only passes when the
//! presenter actually painted the page.

use super::dom::{DomEvent, MockDom, EXPRESSION_ID, RESULT_ID};
use crate::config::CalculatorConfig;
use crate::controller::InputController;
use crate::core::{MathEvaluator, UiState};
use crate::driver::CalculatorDriver;

/// Driver that clicks and types into the mock page
#[derive(Debug)]
pub struct DomDriver {
    controller: InputController<MathEvaluator, MockDom>,
}

impl Default for DomDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DomDriver {
    /// Creates a driver over a fresh calculator page
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a driver with a custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            controller: InputController::new(MathEvaluator::new(), MockDom::calculator(), config),
        }
    }

    /// Returns the page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.controller.presenter()
    }

    /// Returns the controller
    #[must_use]
    pub fn controller(&self) -> &InputController<MathEvaluator, MockDom> {
        &self.controller
    }

    fn slot(&self, id: &str) -> String {
        self.dom().get_element_text(id).unwrap_or_default().to_string()
    }
}

impl CalculatorDriver for DomDriver {
    fn press(&mut self, id: &str) -> bool {
        self.controller
            .presenter_mut()
            .record_event(DomEvent::click(id));
        self.controller.press(id)
    }

    fn type_key(&mut self, key: &str) -> bool {
        self.controller
            .presenter_mut()
            .record_event(DomEvent::key_down(key));
        self.controller.key(key)
    }

    fn expression(&self) -> String {
        self.slot(EXPRESSION_ID)
    }

    fn result(&self) -> String {
        self.slot(RESULT_ID)
    }

    fn view(&self) -> UiState {
        *self.controller.view()
    }

    fn memory(&self) -> f64 {
        self.controller.memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::*;
    use crate::web::dom::{BACK_ID, CONTAINER_ID, HELP_TEXT_ID};

    #[test]
    fn test_dom_driver_new() {
        let driver = DomDriver::new();
        assert!(driver.expression().is_empty());
        assert!(driver.result().is_empty());
        assert!(driver.view().is_main_visible());
    }

    #[test]
    fn test_dom_driver_records_events() {
        let mut driver = DomDriver::default();
        driver.press("one");
        driver.type_key("+");
        assert_eq!(
            driver.dom().event_history(),
            &[DomEvent::click("one"), DomEvent::key_down("+")]
        );
    }

    #[test]
    fn test_dom_driver_reads_from_page() {
        let mut driver = DomDriver::new();
        driver.type_text("6*7");
        driver.type_key("Enter");
        assert_eq!(driver.expression(), driver.controller().expression());
        assert_eq!(driver.result(), "42");
    }

    #[test]
    fn test_dom_driver_help_panel_visibility() {
        let mut driver = DomDriver::new();
        driver.press("help");
        assert!(!driver.dom().is_visible(CONTAINER_ID));
        assert!(driver.dom().is_visible(HELP_TEXT_ID));
        assert!(driver.dom().is_visible(BACK_ID));
        driver.press("back");
        assert!(driver.dom().is_visible(CONTAINER_ID));
        assert!(!driver.dom().is_visible(BACK_ID));
    }

    #[test]
    fn test_dom_driver_with_config() {
        let mut driver =
            DomDriver::with_config(CalculatorConfig::default().with_error_message("Err"));
        driver.press_all(&["one", "add", "ans"]);
        assert_eq!(driver.result(), "Err");
    }

    #[test]
    #[should_panic(expected = "button four rejected")]
    fn test_press_all_rejects_unknown_id() {
        DomDriver::new().press_all(&["one", "four"]);
    }

    #[test]
    #[should_panic(expected = "button one rejected")]
    fn test_press_all_rejects_unreachable_button() {
        let mut driver = DomDriver::new();
        driver.press("help");
        driver.press_all(&["one"]);
    }

    #[test]
    fn test_digit_four_button() {
        let mut driver = DomDriver::new();
        driver.press_all(&["fourth", "mul", "fourth", "ans"]);
        assert_eq!(driver.dom().get_element_text(EXPRESSION_ID), Some("4*4"));
        assert_eq!(driver.result(), "16");
    }

    // ===== Shared behavior tests =====

    #[test]
    fn test_unified_arithmetic() {
        verify_arithmetic(&mut DomDriver::new());
    }

    #[test]
    fn test_unified_scientific_functions() {
        verify_scientific_functions(&mut DomDriver::new());
    }

    #[test]
    fn test_unified_markers() {
        verify_markers(&mut DomDriver::new());
    }

    #[test]
    fn test_unified_error_handling() {
        verify_error_handling(&mut DomDriver::new());
    }

    #[test]
    fn test_unified_delete() {
        verify_delete(&mut DomDriver::new());
    }

    #[test]
    fn test_unified_memory() {
        verify_memory(&mut DomDriver::new());
    }

    #[test]
    fn test_unified_panels() {
        verify_panels(&mut DomDriver::new());
    }

    #[test]
    fn test_unified_keyboard() {
        verify_keyboard(&mut DomDriver::new());
    }

    #[test]
    fn test_behavior_suite() {
        run_behavior_suite(&mut DomDriver::new());
    }
}
