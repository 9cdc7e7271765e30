//! Sub-group inventory report
//!
//! For a top-level group, every direct sub-group becomes one [`ReportRow`]:
//! its member count, its manager (first updater), and the manager's home
//! department from the person directory.

use std::sync::Arc;

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{MemberKind, SENTINEL};
use crate::client::{DirectoryApi, GroupsApi};
use crate::config::Config;
use crate::error::Result;
use crate::output::ReportSink;

pub mod ordered;

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ReportRow {
    /// 1-based position among the enumerated sub-groups
    #[tabled(rename = "#")]
    pub sequence_number: usize,

    #[tabled(rename = "GROUP")]
    pub group_id: String,

    /// Group id with the configured prefix removed
    #[tabled(rename = "ACCOUNT")]
    pub account_name: String,

    /// Direct members that are people; nested groups are not counted
    #[tabled(rename = "MEMBERS")]
    pub member_count: usize,

    #[tabled(rename = "MANAGER")]
    pub manager_name: String,

    #[tabled(rename = "MANAGER ID")]
    pub manager_id: String,

    #[tabled(rename = "DEPARTMENT")]
    pub home_department: String,
}

impl ReportRow {
    /// Columns in output order
    pub fn to_record(&self) -> [String; 7] {
        [
            self.sequence_number.to_string(),
            self.group_id.clone(),
            self.account_name.clone(),
            self.member_count.to_string(),
            self.manager_name.clone(),
            self.manager_id.clone(),
            self.home_department.clone(),
        ]
    }
}

/// Strip `prefix` from the front of `group_id` once; ids without it pass
/// through unchanged.
pub fn account_name(group_id: &str, prefix: &str) -> String {
    group_id.strip_prefix(prefix).unwrap_or(group_id).to_string()
}

/// Knobs for a report run
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub group_prefix: String,
    pub concurrency: usize,
}

impl ReportOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            group_prefix: config.group_prefix.clone(),
            concurrency: config.concurrency,
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Who manages a group, as far as the report is concerned
#[derive(Debug, Clone, PartialEq, Eq)]
struct Manager {
    name: String,
    id: String,
}

impl Manager {
    fn unassigned() -> Self {
        Self {
            name: SENTINEL.to_string(),
            id: SENTINEL.to_string(),
        }
    }

    fn is_assigned(&self) -> bool {
        self.id != SENTINEL
    }
}

/// Builds report rows from the group service and the person directory
pub struct ReportAggregator {
    groups: Arc<dyn GroupsApi>,
    directory: Arc<dyn DirectoryApi>,
    options: ReportOptions,
}

impl ReportAggregator {
    pub fn new(
        groups: Arc<dyn GroupsApi>,
        directory: Arc<dyn DirectoryApi>,
        options: ReportOptions,
    ) -> Self {
        Self {
            groups,
            directory,
            options,
        }
    }

    /// Direct sub-groups of `top_group`, in the order the service lists them.
    /// Grandchildren are never expanded.
    pub async fn sub_groups(&self, top_group: &str) -> Result<Vec<String>> {
        let members = self.groups.list_members(top_group).await?;
        Ok(members
            .into_iter()
            .filter(|m| m.kind == MemberKind::Group)
            .map(|m| m.id)
            .collect())
    }

    async fn manager(&self, group_id: &str) -> Result<Manager> {
        let updaters = self.groups.get_updaters(group_id).await?;
        Ok(updaters
            .into_iter()
            .next()
            .map(|u| Manager {
                name: u.name,
                id: u.id,
            })
            .unwrap_or_else(Manager::unassigned))
    }

    /// Build the row for one sub-group.
    pub async fn build_row(&self, sequence_number: usize, group_id: &str) -> Result<ReportRow> {
        log::debug!("[{}] Resolving {}", sequence_number, group_id);

        let member_count = self
            .groups
            .list_members(group_id)
            .await?
            .iter()
            .filter(|m| m.kind == MemberKind::Account)
            .count();

        let manager = self.manager(group_id).await?;

        let home_department = if manager.is_assigned() {
            self.directory.get_home_department(&manager.id).await?
        } else {
            log::debug!("{} has no updaters", group_id);
            SENTINEL.to_string()
        };

        Ok(ReportRow {
            sequence_number,
            group_id: group_id.to_string(),
            account_name: account_name(group_id, &self.options.group_prefix),
            member_count,
            manager_name: manager.name,
            manager_id: manager.id,
            home_department,
        })
    }

    /// Run the report, streaming rows into `sink` in sequence order.
    ///
    /// Returns the number of sub-groups. A group service failure aborts the
    /// run; rows already handed to the sink stay emitted, nothing after the
    /// failing sub-group is.
    pub async fn run(&self, top_group: &str, sink: &mut dyn ReportSink) -> Result<usize> {
        let sub_groups = self.sub_groups(top_group).await?;
        let total = sub_groups.len();
        log::info!("Found {} sub-groups under {}", total, top_group);

        sink.begin(total)?;

        let groups = sub_groups.as_slice();
        ordered::run_ordered(
            total,
            self.options.concurrency,
            move |index| self.build_row(index + 1, &groups[index]),
            |_, row| sink.row(row),
        )
        .await?;

        sink.finish()?;
        Ok(total)
    }

    /// Run the report and collect every row.
    #[cfg(test)]
    pub async fn generate_report(&self, top_group: &str) -> Result<Vec<ReportRow>> {
        let mut sink = CollectSink::default();
        self.run(top_group, &mut sink).await?;
        Ok(sink.rows)
    }
}

/// Sink that keeps rows in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CollectSink {
    pub total_groups: usize,
    pub rows: Vec<ReportRow>,
}

#[cfg(test)]
impl ReportSink for CollectSink {
    fn begin(&mut self, total_groups: usize) -> Result<()> {
        self.total_groups = total_groups;
        Ok(())
    }

    fn row(&mut self, row: ReportRow) -> Result<()> {
        self.rows.push(row);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
