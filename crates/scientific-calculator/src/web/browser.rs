//! Browser bindings
//!
//! `BrowserCalculator` is what the page's JavaScript talks to. The page
//! forwards every button click and key press; after each call it reads the
//! two slots and the view JSON back and paints them.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::config::CalculatorConfig;
use crate::controller::{ControllerSnapshot, InputController, Presenter};
use crate::core::{MathEvaluator, UiState};

/// Presenter that only remembers what changed
#[derive(Debug, Default)]
struct PageState {
    view_changed: bool,
}

impl Presenter for PageState {
    fn show_expression(&mut self, _expression: &str) {}

    fn show_result(&mut self, _result: &str) {}

    fn show_view(&mut self, _state: &UiState) {
        self.view_changed = true;
    }
}

/// Calculator handle exported to JavaScript
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    controller: InputController<MathEvaluator, PageState>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator from a JSON configuration object.
    ///
    /// Invalid JSON falls back to the defaults with a console warning.
    pub fn from_config_json(json: &str) -> Self {
        console_error_panic_hook::set_once();
        let config = serde_json::from_str::<CalculatorConfig>(json)
            .map_err(|e| e.to_string())
            .and_then(|c| c.validate().map(|()| c).map_err(|e| e.to_string()))
            .unwrap_or_else(|message| {
                console::warn_1(&format!("Ignoring calculator config: {message}").into());
                CalculatorConfig::default()
            });
        Self::with_config(config)
    }

    /// Handles a click on the element with this id.
    ///
    /// Returns true if the view (panel or size) changed and must be
    /// repainted.
    pub fn handle_button(&mut self, button_id: &str) -> bool {
        self.controller.press(button_id);
        self.take_view_change()
    }

    /// Handles `KeyboardEvent.key`. Returns true if the key was used.
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.controller.key(key)
    }

    /// Current expression text
    #[wasm_bindgen(getter)]
    pub fn expression(&self) -> String {
        self.controller.expression().to_string()
    }

    /// Current result text
    #[wasm_bindgen(getter)]
    pub fn result(&self) -> String {
        self.controller.result().to_string()
    }

    /// Panel and size as JSON, e.g. `{"panel":"help","size":"normal"}`
    pub fn view_json(&self) -> String {
        to_json(self.controller.view())
    }

    /// Full observable state as JSON
    pub fn snapshot_json(&self) -> String {
        to_json(&self.controller.snapshot())
    }
}

impl BrowserCalculator {
    fn with_config(config: CalculatorConfig) -> Self {
        let mut calculator = Self {
            controller: InputController::new(MathEvaluator::new(), PageState::default(), config),
        };
        // The page paints its own initial state
        calculator.take_view_change();
        calculator
    }

    fn take_view_change(&mut self) -> bool {
        std::mem::take(&mut self.controller.presenter_mut().view_changed)
    }

    /// Returns the observable state
    #[must_use]
    pub fn snapshot(&self) -> ControllerSnapshot {
        self.controller.snapshot()
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Scientific calculator initialized".into());
}
