//! Terminal application state
//!
//! Wraps an [`InputController`] whose presenter is a plain screen model. The
//! render pass reads the model; input handlers only talk to the controller.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use super::input::{InputHandler, KeyAction};
use super::keypad::hit_test;
use crate::config::CalculatorConfig;
use crate::controller::{InputController, Presenter, KEY_BACKSPACE, KEY_ENTER};
use crate::core::{MathEvaluator, UiState};

/// What the terminal shows: both slots and the panel state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    /// Expression slot
    pub expression: String,
    /// Result slot
    pub result: String,
    /// Panel and size
    pub view: UiState,
}

impl Presenter for Screen {
    fn show_expression(&mut self, expression: &str) {
        self.expression = expression.to_string();
    }

    fn show_result(&mut self, result: &str) {
        self.result = result.to_string();
    }

    fn show_view(&mut self, state: &UiState) {
        self.view = *state;
    }
}

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    controller: InputController<MathEvaluator, Screen>,
    input: InputHandler,
    pressed: Option<&'static str>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates an app with a custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            controller: InputController::new(MathEvaluator::new(), Screen::default(), config),
            input: InputHandler::new(),
            pressed: None,
            should_quit: false,
        }
    }

    /// Returns the screen model
    #[must_use]
    pub fn screen(&self) -> &Screen {
        self.controller.presenter()
    }

    /// Returns the controller
    #[must_use]
    pub fn controller(&self) -> &InputController<MathEvaluator, Screen> {
        &self.controller
    }

    /// Returns the id of the last activated button
    #[must_use]
    pub fn pressed(&self) -> Option<&'static str> {
        self.pressed
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Activates a button by id
    pub fn press(&mut self, id: &str) -> bool {
        let accepted = self.controller.press(id);
        self.pressed = crate::keypad::find_button(id)
            .filter(|_| accepted)
            .map(|b| b.id);
        accepted
    }

    /// Forwards a named key (`"7"`, `"Enter"`, ...) to the controller
    pub fn type_key(&mut self, key: &str) -> bool {
        self.pressed = None;
        self.controller.key(key)
    }

    /// Handles a terminal key event
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        let action = self.input.handle_key(event);
        debug!(?action, "key");
        match action {
            KeyAction::Type(c) => {
                let mut buf = [0u8; 4];
                self.type_key(c.encode_utf8(&mut buf))
            }
            KeyAction::Enter => self.type_key(KEY_ENTER),
            KeyAction::Backspace => self.type_key(KEY_BACKSPACE),
            KeyAction::Button(id) => self.press(id),
            KeyAction::Escape => {
                if self.controller.view().is_main_visible() {
                    self.press("clearComplete")
                } else {
                    self.press("back")
                }
            }
            KeyAction::Quit => {
                self.quit();
                true
            }
            KeyAction::None => false,
        }
    }

    /// Handles a mouse event over a keypad drawn in `keypad_area`.
    ///
    /// Only left clicks count. While a secondary panel is open any click
    /// acts as the back button.
    pub fn handle_mouse(&mut self, event: MouseEvent, keypad_area: Option<Rect>) -> bool {
        if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return false;
        }
        if !self.controller.view().is_main_visible() {
            return self.press("back");
        }
        keypad_area
            .and_then(|area| hit_test(area, event.column, event.row))
            .is_some_and(|button| self.press(button.id))
    }
}
