//! Labeled input widget shared by the registration form.
//!
//! Purely presentational: the caller supplies the value, focus, masking and
//! the error message (if it has decided one should be visible). The widget
//! holds no validation logic of its own.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Rendered height of a single field row, including its border.
pub const FIELD_HEIGHT: u16 = 3;

/// Display inputs for one labeled field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput<'a> {
    /// Label shown as the block title.
    pub label: &'a str,
    /// Current text value.
    pub value: &'a str,
    /// Whether this field currently has focus.
    pub focused: bool,
    /// Render the value as bullets instead of plain text.
    pub masked: bool,
    /// Error message to draw beneath the control, if the caller wants one shown.
    pub error: Option<&'a str>,
}

impl FieldInput<'_> {
    /// The value as rendered: bullets when masked, plain text otherwise.
    fn display_value(&self) -> String {
        if self.masked {
            self.value.chars().map(|_| '\u{2022}').collect()
        } else {
            self.value.to_string()
        }
    }
}

/// Renders one labeled input within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_field_input(input: &FieldInput, frame: &mut Frame, area: Rect) {
    let border_color = if input.error.is_some() {
        Color::Red
    } else if input.focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(input.label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let value = input.display_value();
    let mut spans = vec![Span::raw(value)];
    if input.focused {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);

    // Draw error over the bottom border so it sits beneath the control.
    if let Some(err) = input.error {
        let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
        let err_area = Rect {
            x: area.x + 2,
            y: area.y + FIELD_HEIGHT.saturating_sub(1),
            width: area.width.saturating_sub(4),
            height: 1,
        };
        frame.render_widget(error_line, err_area);
    }
}
