//! Group service and person directory clients

use reqwest::{Client as HttpClient, Response};

use crate::error::{ApiError, Result};

pub mod api;
pub mod directory;
pub mod groups;
#[cfg(any(feature = "native-tls", test))]
mod keys;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod profile;
pub mod tls;

pub use api::{DirectoryApi, GroupsApi};
pub use directory::DirectoryClient;
pub use groups::GroupsClient;
#[cfg(test)]
pub use mock::{MockDirectoryClient, MockGroupsClient};
pub use profile::{ProfileField, SelectorExtractor};
pub use tls::{TlsSettings, build_http_client};

/// Issue a GET. Only transport failures are errors here; status handling is
/// up to the caller.
pub(crate) async fn send_get(http: &HttpClient, url: &str) -> Result<Response> {
    log::debug!("GET {}", url);
    let response = http.get(url).send().await.map_err(ApiError::from)?;
    log::debug!("{} -> {}", url, response.status());
    Ok(response)
}
