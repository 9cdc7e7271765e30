//! Configuration management for gpsr

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Group service endpoint (v3 group resource)
pub const DEFAULT_GROUPS_URL: &str = "https://groups.uw.edu/group_sws/v3/group";

/// Person directory endpoint (identity v2 person resource)
pub const DEFAULT_DIRECTORY_URL: &str = "https://ws.admin.washington.edu/identity/v2/person";

const DEFAULT_CERT_FILE: &str = "/etc/pki/tls/certs/user-reports.hyakm.washington.edu.crt";
const DEFAULT_KEY_FILE: &str = "/etc/pki/tls/private/user-reports.hyakm.washington.edu.key";
const DEFAULT_TOP_GROUP: &str = "u_hyak_klone";
const DEFAULT_GROUP_PREFIX: &str = "u_hyak_";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// PEM client certificate presented to both services
    pub cert_file: PathBuf,

    /// PEM private key matching `cert_file`
    pub key_file: PathBuf,

    /// Extra CA certificates to trust (PEM bundle)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_bundle: Option<PathBuf>,

    /// Base URL of the group service
    pub groups_url: String,

    /// Base URL of the person directory
    pub directory_url: String,

    /// Group whose direct sub-groups are reported
    pub top_group: String,

    /// Prefix stripped from sub-group ids to form the account name
    pub group_prefix: String,

    /// Sub-groups processed at once (1 keeps the run strictly sequential)
    pub concurrency: usize,

    /// Per-request timeout; unset leaves the HTTP stack default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// CSS selector for the home department on directory profile pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_selector: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cert_file: PathBuf::from(DEFAULT_CERT_FILE),
            key_file: PathBuf::from(DEFAULT_KEY_FILE),
            ca_bundle: None,
            groups_url: DEFAULT_GROUPS_URL.to_string(),
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            top_group: DEFAULT_TOP_GROUP.to_string(),
            group_prefix: DEFAULT_GROUP_PREFIX.to_string(),
            concurrency: 1,
            timeout_secs: None,
            department_selector: None,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".gpsr").join("config.yaml"))
    }

    /// Resolve the config file location from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// An explicit path must exist. A missing file at the default location
    /// yields the built-in defaults, since every field has one.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(PathBuf::from(p)),
            None => {
                let default_path = Self::default_path()?;
                if default_path.exists() {
                    Self::load_from(default_path)
                } else {
                    log::debug!(
                        "No config at {}, using defaults",
                        default_path.display()
                    );
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        // An empty file deserializes to unit, not to a mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Render the configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self).map_err(ConfigError::from)?)
    }

    /// Check values that would otherwise fail deep inside a run
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("groups_url", &self.groups_url),
            ("directory_url", &self.directory_url),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                ))
                .into());
            }
        }

        if self.top_group.trim().is_empty() {
            return Err(ConfigError::Invalid("top_group must not be empty".to_string()).into());
        }

        if self.concurrency == 0 {
            return Err(
                ConfigError::Invalid("concurrency must be at least 1".to_string()).into(),
            );
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than 0 when set".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
