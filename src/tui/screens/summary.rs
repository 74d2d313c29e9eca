//! Summary screen — read-only view of the submitted registration record.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::model::Record;
use crate::tui::action::Action;
use crate::tui::app::Screen;

/// Handles a key event on the summary screen.
///
/// The screen is read-only and holds no state of its own; the record it
/// displays lives in the app shell for exactly as long as the screen is
/// shown.
pub fn handle_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::Navigate(Screen::Register),
        _ => Action::None,
    }
}

/// Renders the summary screen.
///
/// With a record: one label/value row per field, in field order, every
/// value in plain text (password included — there is no masking here).
/// Without one: just the no-data notice.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_summary(record: Option<&Record>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Submitted Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    match record {
        None => {
            let notice = Paragraph::new("No Data Found").alignment(Alignment::Center);
            frame.render_widget(notice, body_area);
        }
        Some(record) => {
            let rows: Vec<Row> = record
                .entries()
                .into_iter()
                .map(|(field, value)| {
                    Row::new(vec![
                        Line::styled(
                            field.label(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Line::raw(value.to_string()),
                    ])
                })
                .collect();

            let widths = [Constraint::Length(14), Constraint::Min(0)];
            let table = Table::new(rows, widths);
            frame.render_widget(table, body_area);
        }
    }

    let footer =
        Paragraph::new("q: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
