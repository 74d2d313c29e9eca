//! TUI screen implementations.

pub mod register;
pub mod summary;

pub use register::{RegisterState, draw_register};
pub use summary::draw_summary;
