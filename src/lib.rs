#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Two-screen terminal registration form: a data-entry screen with inline
//! per-field validation and a read-only summary of the submitted record.

pub mod model;
pub mod tui;
