//! Mock service clients for testing
//!
//! Provides in-memory implementations of [`GroupsApi`] and [`DirectoryApi`]
//! so the report pipeline can be exercised without HTTP.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{DirectoryApi, GroupsApi};
use super::models::{MembershipEntry, SENTINEL, Updater};
use crate::error::{ApiError, Result};

/// A call made against one of the mocks, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedCall {
    /// Trait method name (e.g. "list_members")
    pub method: &'static str,
    /// Group or account id passed in
    pub id: String,
}

impl CapturedCall {
    fn new(method: &'static str, id: &str) -> Self {
        Self {
            method,
            id: id.to_string(),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_members: usize,
    pub get_updaters: usize,
    pub get_home_department: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_members + self.get_updaters + self.get_home_department
    }
}

/// Mock group service.
///
/// Unknown groups answer with an empty member list and no updaters.
///
/// # Example
/// ```ignore
/// let mock = MockGroupsClient::new()
///     .with_members("u_top", vec![MembershipEntry::group("u_top_a")])
///     .await;
/// ```
#[derive(Default)]
pub struct MockGroupsClient {
    members: Arc<Mutex<HashMap<String, Vec<MembershipEntry>>>>,
    updaters: Arc<Mutex<HashMap<String, Vec<Updater>>>>,
    /// Errors keyed by (method, group id); returned every time
    errors: Arc<Mutex<HashMap<(&'static str, String), String>>>,
    /// Artificial latency for list_members, per group
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    call_count: Arc<Mutex<CallCounts>>,
    captured: Arc<Mutex<Vec<CapturedCall>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockGroupsClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the direct members of a group.
    pub async fn with_members(self, group_id: &str, members: Vec<MembershipEntry>) -> Self {
        self.members
            .lock()
            .await
            .insert(group_id.to_string(), members);
        self
    }

    /// Configure the updaters of a group.
    pub async fn with_updaters(self, group_id: &str, updaters: Vec<Updater>) -> Self {
        self.updaters
            .lock()
            .await
            .insert(group_id.to_string(), updaters);
        self
    }

    /// Make list_members fail for a group with a server error.
    pub async fn fail_members(self, group_id: &str, message: &str) -> Self {
        self.errors
            .lock()
            .await
            .insert(("list_members", group_id.to_string()), message.to_string());
        self
    }

    /// Make get_updaters fail for a group with a server error.
    pub async fn fail_updaters(self, group_id: &str, message: &str) -> Self {
        self.errors
            .lock()
            .await
            .insert(("get_updaters", group_id.to_string()), message.to_string());
        self
    }

    /// Delay list_members for a group.
    pub async fn with_delay(self, group_id: &str, delay: Duration) -> Self {
        self.delays.lock().await.insert(group_id.to_string(), delay);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured calls in arrival order.
    pub async fn captured_calls(&self) -> Vec<CapturedCall> {
        self.captured.lock().await.clone()
    }

    /// Highest number of list_members calls that were running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn check_error(&self, method: &'static str, group_id: &str) -> Result<()> {
        let errors = self.errors.lock().await;
        match errors.get(&(method, group_id.to_string())) {
            Some(message) => Err(ApiError::ServerError {
                url: format!("mock://{}/{}", method, group_id),
                message: message.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl GroupsApi for MockGroupsClient {
    async fn list_members(&self, group_id: &str) -> Result<Vec<MembershipEntry>> {
        self.call_count.lock().await.list_members += 1;
        self.captured
            .lock()
            .await
            .push(CapturedCall::new("list_members", group_id));

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        let delay = self.delays.lock().await.get(group_id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.check_error("list_members", group_id).await?;
        Ok(self
            .members
            .lock()
            .await
            .get(group_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_updaters(&self, group_id: &str) -> Result<Vec<Updater>> {
        self.call_count.lock().await.get_updaters += 1;
        self.captured
            .lock()
            .await
            .push(CapturedCall::new("get_updaters", group_id));

        self.check_error("get_updaters", group_id).await?;
        Ok(self
            .updaters
            .lock()
            .await
            .get(group_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Mock person directory.
///
/// Accounts without a configured department behave like a directory 404 and
/// resolve to the sentinel.
#[derive(Default)]
pub struct MockDirectoryClient {
    departments: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<CallCounts>>,
    captured: Arc<Mutex<Vec<CapturedCall>>>,
}

impl MockDirectoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure an account's home department.
    pub async fn with_department(self, account_id: &str, department: &str) -> Self {
        self.departments
            .lock()
            .await
            .insert(account_id.to_string(), department.to_string());
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn captured_calls(&self) -> Vec<CapturedCall> {
        self.captured.lock().await.clone()
    }
}

#[async_trait]
impl DirectoryApi for MockDirectoryClient {
    async fn get_home_department(&self, account_id: &str) -> Result<String> {
        self.call_count.lock().await.get_home_department += 1;
        self.captured
            .lock()
            .await
            .push(CapturedCall::new("get_home_department", account_id));

        Ok(self
            .departments
            .lock()
            .await
            .get(account_id)
            .cloned()
            .unwrap_or_else(|| SENTINEL.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_groups_defaults_to_empty() {
        let mock = MockGroupsClient::new();
        assert!(mock.list_members("u_any").await.unwrap().is_empty());
        assert!(mock.get_updaters("u_any").await.unwrap().is_empty());
        assert_eq!(mock.call_counts().await.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_groups_errors_are_sticky() {
        let mock = MockGroupsClient::new().fail_members("u_bad", "boom").await;
        assert!(mock.list_members("u_bad").await.is_err());
        assert!(mock.list_members("u_bad").await.is_err());
        assert!(mock.list_members("u_good").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_directory_unknown_is_sentinel() {
        let mock = MockDirectoryClient::new().with_department("carol", "CS").await;
        assert_eq!(mock.get_home_department("carol").await.unwrap(), "CS");
        assert_eq!(mock.get_home_department("zed").await.unwrap(), SENTINEL);
        assert_eq!(
            mock.captured_calls().await,
            vec![
                CapturedCall::new("get_home_department", "carol"),
                CapturedCall::new("get_home_department", "zed"),
            ]
        );
    }
}
