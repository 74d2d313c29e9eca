//! Actions returned by screen event handlers.

use crate::model::Record;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update global state and navigate between
/// screens. `Submit` is the only transition that carries a payload; plain
/// `Navigate(Screen::Summary)` reaches the summary with no record, which
/// renders the no-data notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen without a payload.
    Navigate(Screen),
    /// Hand the completed record to the summary screen.
    Submit(Record),
    /// Quit the application.
    Quit,
}
