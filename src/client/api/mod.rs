//! API trait definitions split by service
//!
//! - [`GroupsApi`] - group membership and administrative metadata
//! - [`DirectoryApi`] - person profile attributes
//!
//! The report aggregator only talks to these traits, so tests can swap in
//! the in-crate mocks and the CLI can point the real clients anywhere.

mod directory;
mod groups;

pub use directory::DirectoryApi;
pub use groups::GroupsApi;
