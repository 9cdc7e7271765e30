//! Person directory API trait

use async_trait::async_trait;

use crate::error::Result;

/// Profile lookups against the person directory
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Resolve an account's home department.
    ///
    /// A non-success status from the directory resolves to
    /// [`SENTINEL`](crate::client::models::SENTINEL) instead of an error, as
    /// does the sentinel id itself. An empty string means the profile has no
    /// home department. Only transport failures are errors.
    async fn get_home_department(&self, account_id: &str) -> Result<String>;
}
