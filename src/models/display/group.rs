//! Group and directory lookup display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{MembershipEntry, Updater};

/// Group member display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MemberDisplay {
    /// `group` or `uwnetid`
    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub kind: String,

    /// Group id or NetID
    #[tabled(rename = "ID")]
    pub id: String,
}

impl From<MembershipEntry> for MemberDisplay {
    fn from(entry: MembershipEntry) -> Self {
        Self {
            kind: entry.kind.to_string(),
            id: entry.id,
        }
    }
}

/// Updater display model; position 1 is the group's manager.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UpdaterDisplay {
    #[tabled(rename = "#")]
    pub position: usize,

    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub kind: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ID")]
    pub id: String,
}

impl UpdaterDisplay {
    /// Number updaters from 1 in service order
    pub fn numbered(updaters: Vec<Updater>) -> Vec<Self> {
        updaters
            .into_iter()
            .enumerate()
            .map(|(i, u)| Self {
                position: i + 1,
                kind: u.kind,
                name: u.name,
                id: u.id,
            })
            .collect()
    }
}

/// Home department lookup result
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DepartmentDisplay {
    #[tabled(rename = "ACCOUNT")]
    pub account: String,

    #[tabled(rename = "HOME DEPARTMENT")]
    pub home_department: String,
}
