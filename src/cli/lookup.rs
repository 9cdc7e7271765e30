//! Single-resource lookups: group members, group updaters, home department
//!
//! These expose the individual service calls the report is built from, which
//! is mostly useful when a report row looks wrong.

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::{DirectoryApi, GroupsApi};
use crate::error::Result;
use crate::models::{DepartmentDisplay, MemberDisplay, UpdaterDisplay};
use crate::output;

/// List the direct members of a group
pub async fn members(opts: &GlobalOptions, group_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let members = ctx.groups.list_members(group_id).await?;
    log::debug!("{} has {} direct members", group_id, members.len());

    let display: Vec<MemberDisplay> = members.into_iter().map(MemberDisplay::from).collect();
    output::print_items(&display, ctx.format)
}

/// List a group's updaters; the first one is the group's manager in reports
pub async fn updaters(opts: &GlobalOptions, group_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let updaters = ctx.groups.get_updaters(group_id).await?;

    let display = UpdaterDisplay::numbered(updaters);
    output::print_items(&display, ctx.format)
}

/// Look up an account's home department
pub async fn department(opts: &GlobalOptions, account_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let home_department = ctx.directory.get_home_department(account_id).await?;

    let display = vec![DepartmentDisplay {
        account: account_id.to_string(),
        home_department,
    }];
    output::print_items(&display, ctx.format)
}
