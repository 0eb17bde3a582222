//! Panel visibility and size mode
//!
//! Two independent axes. The panel axis is a small state machine rooted at
//! `Main`: Help and Cut are only reachable from Main, and a single back
//! action returns from whichever of them is open. The size axis is a plain
//! toggle.

use serde::{Deserialize, Serialize};

/// Mutually exclusive visible region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    /// The calculator itself
    #[default]
    Main,
    /// Help text
    Help,
    /// Closed calculator with only the back button showing
    Cut,
}

/// Calculator width mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeMode {
    /// Full width
    #[default]
    Normal,
    /// Reduced width
    Minimized,
}

impl SizeMode {
    /// Returns the other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Minimized,
            Self::Minimized => Self::Normal,
        }
    }
}

/// Visible state of the calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UiState {
    panel: Panel,
    size: SizeMode,
}

impl UiState {
    /// Main panel, normal size
    #[must_use]
    pub const fn new() -> Self {
        Self {
            panel: Panel::Main,
            size: SizeMode::Normal,
        }
    }

    /// Returns the visible panel
    #[must_use]
    pub const fn panel(&self) -> Panel {
        self.panel
    }

    /// Returns the size mode
    #[must_use]
    pub const fn size(&self) -> SizeMode {
        self.size
    }

    /// Returns true while the calculator keypad is on screen
    #[must_use]
    pub const fn is_main_visible(&self) -> bool {
        matches!(self.panel, Panel::Main)
    }

    /// Returns true while the back button is on screen
    #[must_use]
    pub const fn back_visible(&self) -> bool {
        !self.is_main_visible()
    }

    /// Returns true in minimized mode
    #[must_use]
    pub const fn is_minimized(&self) -> bool {
        matches!(self.size, SizeMode::Minimized)
    }

    /// Main → Help. Returns false (and does nothing) from any other panel.
    pub fn open_help(&mut self) -> bool {
        self.open(Panel::Help)
    }

    /// Main → Cut. Returns false (and does nothing) from any other panel.
    pub fn open_cut(&mut self) -> bool {
        self.open(Panel::Cut)
    }

    /// Help/Cut → Main. Returns false when Main is already showing.
    pub fn back(&mut self) -> bool {
        if self.is_main_visible() {
            return false;
        }
        self.panel = Panel::Main;
        true
    }

    /// Flips between normal and minimized size
    pub fn toggle_size(&mut self) {
        self.size = self.size.toggled();
    }

    fn open(&mut self, target: Panel) -> bool {
        if !self.is_main_visible() {
            return false;
        }
        self.panel = target;
        true
    }
}
