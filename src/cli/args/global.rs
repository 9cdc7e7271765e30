//! Global CLI options shared across all commands
//!
//! Every option here can also come from a `GPSR_*` environment variable and
//! overrides the matching config file value.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; [`GlobalOptions::apply_to`] lays it over the
/// loaded config.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (csv, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.gpsr/config.yaml)
    pub config: Option<String>,

    pub cert: Option<PathBuf>,
    pub key: Option<PathBuf>,
    pub ca_bundle: Option<PathBuf>,
    pub groups_url: Option<String>,
    pub directory_url: Option<String>,

    /// Top-level group override
    pub group: Option<String>,

    /// Account-name prefix override
    pub prefix: Option<String>,

    pub concurrency: Option<usize>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            cert: cli.cert.clone(),
            key: cli.key.clone(),
            ca_bundle: cli.ca_bundle.clone(),
            groups_url: cli.groups_url.clone(),
            directory_url: cli.directory_url.clone(),
            group: cli.group.clone(),
            prefix: cli.prefix.clone(),
            concurrency: cli.concurrency,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Overwrite config values with any options given on the command line.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ref cert) = self.cert {
            config.cert_file = cert.clone();
        }
        if let Some(ref key) = self.key {
            config.key_file = key.clone();
        }
        if let Some(ref ca_bundle) = self.ca_bundle {
            config.ca_bundle = Some(ca_bundle.clone());
        }
        if let Some(ref url) = self.groups_url {
            config.groups_url = url.clone();
        }
        if let Some(ref url) = self.directory_url {
            config.directory_url = url.clone();
        }
        if let Some(ref group) = self.group {
            config.top_group = group.clone();
        }
        if let Some(ref prefix) = self.prefix {
            config.group_prefix = prefix.clone();
        }
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }
    }
}
