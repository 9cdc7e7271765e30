//! Group and directory service data models

mod group;

pub(crate) use group::RawMember;
pub use group::{MemberKind, MembershipEntry, Updater};

/// Placeholder for a manager or department that could not be resolved
pub const SENTINEL: &str = "None";
