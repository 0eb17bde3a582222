//! Input controller
//!
//! Binds button activations and key presses to the calculator core and pushes
//! every visible change to a [`Presenter`]. All front ends (mock DOM, browser
//! bridge, terminal) drive the same controller.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::core::{format_number, CalcResult, Evaluator, ExpressionBuffer, MemoryRegister, UiState};
use crate::keypad::{self, KeypadAction, MemoryAction};

/// Characters that are appended verbatim when typed
pub const KEYBOARD_ALLOW_LIST: &str = "0123456789abcdefghijklmnopqrstuvwxyz+-\"*/>()!.'%,^";

/// Key that evaluates the expression
pub const KEY_ENTER: &str = "Enter";

/// Key that deletes the last character
pub const KEY_BACKSPACE: &str = "Backspace";

/// Output side of the calculator: the two text slots and the panel state
pub trait Presenter {
    /// Writes the expression slot
    fn show_expression(&mut self, expression: &str);

    /// Writes the result slot
    fn show_result(&mut self, result: &str);

    /// Applies panel visibility and size mode
    fn show_view(&mut self, state: &UiState);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn show_expression(&mut self, expression: &str) {
        (**self).show_expression(expression);
    }

    fn show_result(&mut self, result: &str) {
        (**self).show_result(result);
    }

    fn show_view(&mut self, state: &UiState) {
        (**self).show_view(state);
    }
}

/// Serializable copy of everything the user can observe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerSnapshot {
    /// Expression slot
    pub expression: String,
    /// Result slot
    pub result: String,
    /// Panel and size
    pub view: UiState,
    /// Memory register value
    pub memory: f64,
}

/// Routes input events to the buffer, memory register and view state
#[derive(Debug)]
pub struct InputController<E: Evaluator, P: Presenter> {
    buffer: ExpressionBuffer,
    memory: MemoryRegister,
    view: UiState,
    result: String,
    evaluator: E,
    presenter: P,
    config: CalculatorConfig,
}

impl<E: Evaluator, P: Presenter> InputController<E, P> {
    /// Creates a controller and paints the initial state
    pub fn new(evaluator: E, presenter: P, config: CalculatorConfig) -> Self {
        let mut view = UiState::new();
        if config.start_minimized {
            view.toggle_size();
        }
        let mut controller = Self {
            buffer: ExpressionBuffer::new(),
            memory: MemoryRegister::new(),
            view,
            result: String::new(),
            evaluator,
            presenter,
            config,
        };
        controller.presenter.show_view(&controller.view);
        controller.presenter.show_expression("");
        controller.presenter.show_result("");
        controller
    }

    /// Activates the button with element id `id`.
    ///
    /// Returns false for unknown ids and for buttons that are not reachable
    /// from the current panel.
    pub fn press(&mut self, id: &str) -> bool {
        match keypad::find_button(id) {
            Some(button) => self.dispatch(button.action),
            None => {
                warn!(id, "unknown button");
                false
            }
        }
    }

    /// Handles a key press by its key name (`"7"`, `"Enter"`, ...).
    ///
    /// Returns false when the key is ignored.
    pub fn key(&mut self, key: &str) -> bool {
        if !self.config.keyboard_enabled || !self.view.is_main_visible() {
            return false;
        }
        match key {
            KEY_ENTER => self.dispatch(KeypadAction::Evaluate),
            KEY_BACKSPACE => self.dispatch(KeypadAction::DeleteLast),
            _ if is_allowed_key(key) => {
                self.buffer.append(key);
                self.refresh_expression();
                true
            }
            _ => false,
        }
    }

    /// Performs one keypad action.
    ///
    /// Only [`KeypadAction::Back`] is accepted while Help or Cut is showing.
    pub fn dispatch(&mut self, action: KeypadAction) -> bool {
        if !self.view.is_main_visible() && action != KeypadAction::Back {
            debug!(?action, panel = ?self.view.panel(), "action ignored off the main panel");
            return false;
        }

        if let Some(token) = action.token(self.buffer.is_empty()) {
            self.buffer.append(token);
            self.refresh_expression();
            return true;
        }

        match action {
            KeypadAction::Evaluate => {
                if self.buffer.is_empty() {
                    self.set_result(String::new());
                } else {
                    self.evaluate_into_result();
                }
            }
            KeypadAction::DeleteLast => {
                self.buffer.delete_last();
                self.refresh_expression();
                if self.buffer.is_empty() {
                    self.set_result(String::new());
                } else {
                    self.evaluate_into_result();
                }
            }
            KeypadAction::ClearAll => {
                self.buffer.clear();
                self.refresh_expression();
                self.set_result(String::new());
            }
            KeypadAction::Memory(op) => self.memory_action(op),
            KeypadAction::OpenHelp => return self.change_view(UiState::open_help),
            KeypadAction::OpenCut => return self.change_view(UiState::open_cut),
            KeypadAction::Back => return self.change_view(UiState::back),
            KeypadAction::ToggleSize => {
                self.view.toggle_size();
                self.presenter.show_view(&self.view);
            }
            KeypadAction::Insert(_) | KeypadAction::InsertJoined { .. } => {}
        }
        true
    }

    /// Returns the expression text
    #[must_use]
    pub fn expression(&self) -> &str {
        self.buffer.text()
    }

    /// Returns the result slot text
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Returns the panel and size state
    #[must_use]
    pub const fn view(&self) -> &UiState {
        &self.view
    }

    /// Returns the memory register value
    #[must_use]
    pub const fn memory(&self) -> f64 {
        self.memory.recall()
    }

    /// Returns the active configuration
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the presenter
    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Captures the observable state
    #[must_use]
    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            expression: self.buffer.text().to_string(),
            result: self.result.clone(),
            view: self.view,
            memory: self.memory.recall(),
        }
    }

    fn evaluate(&self) -> CalcResult<f64> {
        self.buffer.evaluate(&self.evaluator)
    }

    fn evaluate_into_result(&mut self) {
        let text = match self.evaluate() {
            Ok(value) => format_number(value, self.config.precision),
            Err(_) => self.config.error_message.clone(),
        };
        self.set_result(text);
    }

    fn memory_action(&mut self, op: MemoryAction) {
        match op {
            MemoryAction::Recall => {
                // Full precision; rounding is only for the result slot
                let recalled = self.memory.recall().to_string();
                self.buffer.clear();
                self.buffer.append(&recalled);
                self.refresh_expression();
            }
            MemoryAction::Clear => self.memory.clear(),
            MemoryAction::Store | MemoryAction::Add | MemoryAction::Subtract => {
                // An empty expression counts as zero
                let current = if self.buffer.is_empty() {
                    Ok(0.0)
                } else {
                    self.evaluate()
                };
                let applied = current.and_then(|current| match op {
                    MemoryAction::Store => self.memory.store(current),
                    MemoryAction::Add => self.memory.add(current),
                    _ => self.memory.subtract(current),
                });
                if let Err(err) = applied {
                    debug!(?op, error = %err, "memory operation skipped");
                    self.set_result(self.config.error_message.clone());
                }
            }
        }
        debug!(?op, memory = self.memory.recall(), "memory updated");
    }

    fn change_view(&mut self, transition: fn(&mut UiState) -> bool) -> bool {
        let changed = transition(&mut self.view);
        if changed {
            debug!(panel = ?self.view.panel(), "panel changed");
            self.presenter.show_view(&self.view);
        }
        changed
    }

    fn refresh_expression(&mut self) {
        self.presenter.show_expression(self.buffer.text());
    }

    fn set_result(&mut self, text: String) {
        self.presenter.show_result(&text);
        self.result = text;
    }
}

/// Returns true for single characters on the keyboard allow-list
#[must_use]
pub fn is_allowed_key(key: &str) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if KEYBOARD_ALLOW_LIST.contains(c))
}
