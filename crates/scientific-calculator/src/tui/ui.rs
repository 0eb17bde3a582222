//! Terminal rendering
//!
//! The calculator is drawn in a horizontally centered column whose width
//! follows the size mode. Help replaces the calculator with the help text;
//! Cut leaves only the back button.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::{Panel, SizeMode, UiState};

/// Calculator title
pub const TITLE: &str = " Scientific Calculator ";

/// Window button hints shown under the calculator
pub const CHROME_HINT: &str = " F1 help | F2 size | F3 close | Ctrl+C quit ";

/// Back button label
pub const BACK_LABEL: &str = "[ Back ]";

/// Column width in normal mode, percent of the terminal
pub const NORMAL_WIDTH_PERCENT: u16 = 60;

/// Column width in minimized mode, percent of the terminal
pub const MINIMIZED_WIDTH_PERCENT: u16 = 40;

/// Help panel lines: (key, description)
pub const HELP_LINES: &[(&str, &str)] = &[
    ("0-9 a-z", "Type into the expression"),
    ("+ - * / ^", "Operators"),
    ("%", "Percent (50% = 0.5)"),
    ("mod", "Remainder (7mod3 = 1)"),
    ("Enter", "Evaluate"),
    ("Backspace", "Delete last character"),
    ("Del", "Clear everything"),
    ("F5 F6 F7", "MS, M+, M-"),
    ("F8 F9", "MR, MC"),
    ("Esc", "Back to the calculator"),
];

/// Returns the calculator column for a terminal area
#[must_use]
pub fn calculator_area(area: Rect, size: SizeMode) -> Rect {
    let percent = match size {
        SizeMode::Normal => NORMAL_WIDTH_PERCENT,
        SizeMode::Minimized => MINIMIZED_WIDTH_PERCENT,
    };
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(percent)])
        .flex(Flex::Center)
        .split(area)[0]
}

/// Splits the calculator column into expression, result and keypad
fn main_layout(column: Rect) -> [Rect; 3] {
    let inner = Block::default().borders(Borders::ALL).inner(column);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Expression
            Constraint::Length(3), // Result
            Constraint::Min(0),    // Keypad
        ])
        .split(inner);
    [chunks[0], chunks[1], chunks[2]]
}

/// Returns where the keypad is drawn, if it is on screen
#[must_use]
pub fn keypad_area(area: Rect, view: &UiState) -> Option<Rect> {
    if !view.is_main_visible() {
        return None;
    }
    let [_, _, keypad] = main_layout(calculator_area(area, view.size()));
    Some(keypad)
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_main(&self, column: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .title_bottom(Line::from(CHROME_HINT))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(column, buf);

        let [expression, result, keypad] = main_layout(column);
        let screen = self.app.screen();

        Paragraph::new(screen.expression.as_str())
            .block(
                Block::default()
                    .title(" Expression ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(expression, buf);

        let result_style = if screen.result == self.app.controller().config().error_message {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };
        Paragraph::new(Span::styled(screen.result.as_str(), result_style))
            .block(
                Block::default()
                    .title(" Result ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(result, buf);

        KeypadWidget::new()
            .pressed(self.app.pressed())
            .render(keypad, buf);
    }

    fn render_help(column: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = HELP_LINES
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("{key:>10}"), Style::default().fg(Color::Yellow)),
                    Span::raw("  "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            BACK_LABEL,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )));

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(column, buf);
    }

    fn render_cut(area: Rect, buf: &mut Buffer) {
        let width = BACK_LABEL.len() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height / 2;
        buf.set_span(
            x,
            y,
            &Span::styled(BACK_LABEL, Style::default().fg(Color::Black).bg(Color::Cyan)),
            width,
        );
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let view = self.app.screen().view;
        let column = calculator_area(area, view.size());
        match view.panel() {
            Panel::Main => self.render_main(column, buf),
            Panel::Help => Self::render_help(column, buf),
            Panel::Cut => Self::render_cut(area, buf),
        }
    }
}
