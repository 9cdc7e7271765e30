//! Group service API trait

use async_trait::async_trait;

use crate::client::models::{MembershipEntry, Updater};
use crate::error::Result;

/// Read-only operations against the group service
///
/// Every failure here is fatal for a report run: transport errors, any
/// status other than 200, and bodies that do not parse.
#[async_trait]
pub trait GroupsApi: Send + Sync {
    /// List the direct members of a group.
    ///
    /// Only `group` and `uwnetid` members are returned, in response order.
    async fn list_members(&self, group_id: &str) -> Result<Vec<MembershipEntry>>;

    /// List the group's updaters in the order the service returns them.
    async fn get_updaters(&self, group_id: &str) -> Result<Vec<Updater>>;
}
