//! Keypad widget for the terminal calculator
//!
//! Draws the shared keypad table as a grid of buttons and maps mouse clicks
//! back to button ids. The button that was last activated is highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::keypad::{button_at, KeypadAction, KeypadButtonDef, COLS, KEYPAD, ROWS};

/// Returns the grid button under `(x, y)` for a keypad drawn in `area`
#[must_use]
pub fn hit_test(area: Rect, x: u16, y: u16) -> Option<&'static KeypadButtonDef> {
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }

    let rel_x = x - area.x;
    let rel_y = y - area.y;

    // Border
    if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
        return None;
    }

    let (btn_width, btn_height) = cell_size(inner(area));
    if btn_width == 0 || btn_height == 0 {
        return None;
    }

    let col = ((rel_x - 1) / btn_width) as usize;
    let row = ((rel_y - 1) / btn_height) as usize;

    if row < ROWS && col < COLS {
        button_at(row, col)
    } else {
        None
    }
}

fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn cell_size(inner: Rect) -> (u16, u16) {
    (inner.width / COLS as u16, inner.height / ROWS as u16)
}

fn button_style(action: KeypadAction) -> Style {
    match action {
        KeypadAction::Insert(token) if token.chars().all(|c| c.is_ascii_digit() || c == '.') => {
            Style::default().fg(Color::White)
        }
        KeypadAction::Insert(token) if token.ends_with('(') => Style::default().fg(Color::Cyan),
        KeypadAction::Insert(_) | KeypadAction::InsertJoined { .. } => {
            Style::default().fg(Color::Yellow)
        }
        KeypadAction::Evaluate => Style::default().fg(Color::Green),
        KeypadAction::ClearAll | KeypadAction::DeleteLast => Style::default().fg(Color::Red),
        KeypadAction::Memory(_) => Style::default().fg(Color::Magenta),
        _ => Style::default().fg(Color::Cyan),
    }
}

/// Keypad widget for rendering
#[derive(Debug, Default)]
pub struct KeypadWidget<'a> {
    pressed: Option<&'a str>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a keypad with nothing highlighted
    #[must_use]
    pub fn new() -> Self {
        Self { pressed: None }
    }

    /// Highlights the button with this id
    #[must_use]
    pub fn pressed(mut self, id: Option<&'a str>) -> Self {
        self.pressed = id;
        self
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = inner(area);
        let (btn_width, btn_height) = cell_size(inner);
        if btn_width < 2 || btn_height == 0 {
            return;
        }

        for btn in KEYPAD {
            let x = inner.x + btn.col as u16 * btn_width;
            let y = inner.y + btn.row as u16 * btn_height + btn_height / 2;

            let style = if self.pressed == Some(btn.id) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                button_style(btn.action)
            };

            let bracketed = format!("[{}]", btn.label);
            let label = if bracketed.chars().count() as u16 <= btn_width {
                bracketed
            } else {
                btn.label.chars().take(btn_width as usize).collect()
            };
            let label_x = x + btn_width.saturating_sub(label.chars().count() as u16) / 2;

            buf.set_span(label_x, y, &Span::styled(label, style), btn_width);
        }
    }
}
