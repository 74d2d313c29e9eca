//! Registration screen — the data-entry form with inline validation.

use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Errors, Field, Record, validate};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::{FIELD_HEIGHT, FieldInput, draw_field_input};

/// State for the registration screen.
///
/// The record holds the raw values; the errors map is never stored here and
/// is derived from the record on every use. The touched set only gates which
/// errors are displayed, never whether the form may submit.
#[derive(Debug, Clone)]
pub struct RegisterState {
    record: Record,
    touched: HashSet<Field>,
    focus: usize,
    show_password: bool,
}

impl Default for RegisterState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterState {
    /// Creates a fresh form: all fields empty except the default dialing code.
    pub fn new() -> Self {
        let mut record = Record::new();
        record.set(Field::CountryCode, "+91".into());
        Self {
            record,
            touched: HashSet::new(),
            focus: 0,
            show_password: false,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers == KeyModifiers::ALT {
            match key.code {
                KeyCode::Char('p') => {
                    self.show_password = !self.show_password;
                    return Action::None;
                }
                KeyCode::Char('s') => return Action::Navigate(Screen::Summary),
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.blur_focused();
                self.focus = (self.focus + 1) % Field::ALL.len();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.blur_focused();
                self.focus = (self.focus + Field::ALL.len() - 1) % Field::ALL.len();
                Action::None
            }
            KeyCode::Backspace => {
                self.record.pop(self.focused_field());
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            KeyCode::Char(ch) => {
                self.record.push(self.focused_field(), ch);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Returns the record being edited.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Returns the currently focused field.
    pub fn focused_field(&self) -> Field {
        Field::ALL[self.focus]
    }

    /// Returns `true` if the user has left `field` at least once.
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Returns `true` if the password is rendered in plain text.
    pub fn show_password(&self) -> bool {
        self.show_password
    }

    /// Derives the errors map from the current record.
    pub fn errors(&self) -> Errors {
        validate(&self.record)
    }

    /// True iff every field passes validation, regardless of touched state.
    pub fn is_valid(&self) -> bool {
        self.errors().is_valid()
    }

    /// Resets to a fresh form, as if the screen were newly entered.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Marks the focused field as visited-and-left. Idempotent.
    fn blur_focused(&mut self) {
        self.touched.insert(self.focused_field());
    }

    /// Submits the form: hands off a copy of the record when valid,
    /// otherwise does nothing at all.
    fn submit(&mut self) -> Action {
        if self.is_valid() {
            Action::Submit(self.record.clone())
        } else {
            Action::None
        }
    }
}

/// Renders the registration screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_register(state: &RegisterState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field_count = Field::ALL.len() as u16;
    let [fields_area, submit_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(field_count * FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let rows = Layout::vertical(vec![Constraint::Length(FIELD_HEIGHT); Field::ALL.len()])
        .split(fields_area);

    // Derived fresh on every render; never cached across record mutations.
    let errors = state.errors();

    for (i, field) in Field::ALL.into_iter().enumerate() {
        let error = state
            .is_touched(field)
            .then(|| errors.get(field))
            .flatten()
            .map(ToString::to_string);
        let input = FieldInput {
            label: field.label(),
            value: state.record().get(field),
            focused: field == state.focused_field(),
            masked: field.is_secret() && !state.show_password(),
            error: error.as_deref(),
        };
        draw_field_input(&input, frame, rows[i]);
    }

    let submit_style = if state.is_valid() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let submit = Paragraph::new(Line::from("[ Submit ]")).style(submit_style);
    frame.render_widget(submit, submit_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: submit  Alt+P: show/hide password  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
