//! Display models for CLI output
//!
//! Converts service response types into CLI-friendly display formats.

pub mod display;

pub use display::{DepartmentDisplay, MemberDisplay, UpdaterDisplay};
