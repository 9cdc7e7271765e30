//! Person directory client

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};

use super::api::DirectoryApi;
use super::models::SENTINEL;
use super::profile::{ProfileField, ProfileFieldExtractor, SelectorExtractor};
use super::send_get;
use crate::error::{ApiError, Result};

/// Client for the person directory's `full` profile resource
#[derive(Clone)]
pub struct DirectoryClient {
    http: HttpClient,
    base_url: String,
    extractor: Arc<dyn ProfileFieldExtractor>,
}

impl DirectoryClient {
    /// Create a client rooted at the person resource, e.g.
    /// `https://ws.admin.washington.edu/identity/v2/person`.
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            extractor: Arc::new(SelectorExtractor::default()),
        }
    }

    /// Replace the page layout knowledge
    pub fn with_extractor(mut self, extractor: impl ProfileFieldExtractor + 'static) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    fn profile_url(&self, account_id: &str) -> String {
        format!("{}/{}/full", self.base_url, account_id)
    }
}

#[async_trait]
impl DirectoryApi for DirectoryClient {
    async fn get_home_department(&self, account_id: &str) -> Result<String> {
        if account_id.is_empty() || account_id == SENTINEL {
            return Ok(SENTINEL.to_string());
        }

        let url = self.profile_url(account_id);
        let response = send_get(&self.http, &url).await?;

        let status = response.status();
        // Read the body regardless of status; a failed read is a transport error
        let body = response.text().await.map_err(ApiError::from)?;

        if status != StatusCode::OK {
            log::warn!(
                "Directory returned {} for {}, using '{}'",
                status,
                account_id,
                SENTINEL
            );
            return Ok(SENTINEL.to_string());
        }

        Ok(self
            .extractor
            .extract(&body, ProfileField::HomeDepartment)
            .unwrap_or_default())
    }
}
