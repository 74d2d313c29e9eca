//! Reusable TUI widgets.

pub mod field_input;

pub use field_input::{FIELD_HEIGHT, FieldInput, draw_field_input};
