//! Group service models

use serde::{Deserialize, Serialize};

/// What a membership entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberKind {
    /// A nested group
    #[serde(rename = "group")]
    Group,

    /// An individual person (UW NetID)
    #[serde(rename = "uwnetid")]
    Account,
}

impl MemberKind {
    /// Map the service's `type` string, ignoring kinds the report does not use
    /// (dns, eppn, uwwi and friends).
    pub fn from_type(kind: &str) -> Option<Self> {
        match kind {
            "group" => Some(Self::Group),
            "uwnetid" => Some(Self::Account),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Account => "uwnetid",
        }
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direct member of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipEntry {
    /// Member kind
    #[serde(rename = "type")]
    pub kind: MemberKind,

    /// Group id or NetID
    pub id: String,
}

#[cfg(test)]
impl MembershipEntry {
    pub fn group(id: impl Into<String>) -> Self {
        Self {
            kind: MemberKind::Group,
            id: id.into(),
        }
    }

    pub fn account(id: impl Into<String>) -> Self {
        Self {
            kind: MemberKind::Account,
            id: id.into(),
        }
    }
}

/// Member as it appears on the wire, before kind filtering
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawMember {
    /// Absent or null is treated as an unknown kind and dropped
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub id: String,
}

impl RawMember {
    pub fn into_entry(self) -> Option<MembershipEntry> {
        self.kind
            .as_deref()
            .and_then(MemberKind::from_type)
            .map(|kind| MembershipEntry { kind, id: self.id })
    }
}

/// Account allowed to change a group's membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Updater {
    /// Entity type (usually `uwnetid`, occasionally `group`)
    #[serde(rename = "type")]
    pub kind: String,

    /// Display name; the service omits it for some entity types
    #[serde(default)]
    pub name: String,

    /// NetID or group id
    pub id: String,
}
