//! Display models for lookup command output

mod group;

pub use group::{DepartmentDisplay, MemberDisplay, UpdaterDisplay};
