//! Group service client

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::api::GroupsApi;
use super::models::{MembershipEntry, RawMember, Updater};
use super::send_get;
use crate::error::{ApiError, Result};

/// Client for the group service REST API
#[derive(Debug, Clone)]
pub struct GroupsClient {
    http: HttpClient,
    base_url: String,
}

impl GroupsClient {
    /// Create a client rooted at the group resource, e.g.
    /// `https://groups.uw.edu/group_sws/v3/group`.
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn group_url(&self, group_id: &str) -> String {
        format!("{}/{}", self.base_url, group_id)
    }

    /// GET a JSON document, treating anything but 200 as fatal
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = send_get(&self.http, url).await?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let body = response.text().await.map_err(ApiError::from)?;
                let data = serde_json::from_str::<T>(&body).map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", url, e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ApiError::Forbidden(url.to_string()).into())
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(url.to_string()).into()),
            status if status.is_server_error() => {
                let message = response
                    .text()
                    .await
                    .ok()
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| status.to_string());
                Err(ApiError::ServerError {
                    url: url.to_string(),
                    message,
                }
                .into())
            }
            _ => Err(ApiError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into()),
        }
    }
}

#[async_trait]
impl GroupsApi for GroupsClient {
    async fn list_members(&self, group_id: &str) -> Result<Vec<MembershipEntry>> {
        #[derive(Deserialize)]
        struct MembersResponse {
            data: Vec<RawMember>,
        }

        let url = format!("{}/member", self.group_url(group_id));
        let response: MembersResponse = self.get_json(&url).await?;

        let members: Vec<MembershipEntry> = response
            .data
            .into_iter()
            .filter_map(RawMember::into_entry)
            .collect();

        log::debug!("Group {} has {} direct members", group_id, members.len());
        Ok(members)
    }

    async fn get_updaters(&self, group_id: &str) -> Result<Vec<Updater>> {
        #[derive(Deserialize)]
        struct GroupData {
            #[serde(default)]
            updaters: Vec<Updater>,
        }

        #[derive(Deserialize)]
        struct GroupResponse {
            data: GroupData,
        }

        let url = self.group_url(group_id);
        let response: GroupResponse = self.get_json(&url).await?;
        Ok(response.data.updaters)
    }
}
