//! Command execution context
//!
//! Resolves configuration from the file, environment and flags, then builds
//! the mutually-authenticated clients every network command needs.

use std::sync::Arc;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{
    DirectoryClient, GroupsClient, ProfileField, SelectorExtractor, TlsSettings,
    build_http_client,
};
use crate::config::Config;
use crate::error::Result;
use crate::report::{ReportAggregator, ReportOptions};

/// Context for command execution containing config, clients, and output format.
pub struct CommandContext {
    /// Resolved and validated configuration
    pub config: Config,
    /// Group service client (Arc-wrapped for concurrent sub-group lookups)
    pub groups: Arc<GroupsClient>,
    /// Person directory client
    pub directory: Arc<DirectoryClient>,
    /// Output format preference
    pub format: OutputFormat,
}

/// Load the config file and lay the CLI/env overrides on top.
pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load_at(opts.config_ref())?;
    opts.apply_to(&mut config);
    config.validate()?;
    Ok(config)
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config is invalid or the client certificate, key
    /// or CA bundle cannot be loaded.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = resolve_config(opts)?;

        // One HTTP client carries the identity for both services
        let http = build_http_client(&TlsSettings::from_config(&config))?;

        let groups = GroupsClient::new(http.clone(), config.groups_url.clone());

        let mut directory = DirectoryClient::new(http, config.directory_url.clone());
        if let Some(ref css) = config.department_selector {
            let extractor =
                SelectorExtractor::default().with_selector(ProfileField::HomeDepartment, css)?;
            directory = directory.with_extractor(extractor);
        }

        Ok(Self {
            config,
            groups: Arc::new(groups),
            directory: Arc::new(directory),
            format: opts.format,
        })
    }

    /// Report aggregator wired to this context's clients.
    pub fn aggregator(&self) -> ReportAggregator {
        ReportAggregator::new(
            self.groups.clone(),
            self.directory.clone(),
            ReportOptions::from_config(&self.config),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::error::{Error, TlsError};

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    /// Options pointing at the fixture identity and an empty config file.
    /// The returned directory must outlive the options.
    fn options_with_fixtures() -> (tempfile::TempDir, GlobalOptions) {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("config.yaml");
        std::fs::write(&config_path, "").unwrap();

        let opts = GlobalOptions {
            config: Some(config_path.to_str().unwrap().to_string()),
            cert: Some(fixture("client.crt")),
            key: Some(fixture("client.key")),
            groups_url: Some("http://127.0.0.1:9/group".to_string()),
            directory_url: Some("http://127.0.0.1:9/person".to_string()),
            ..GlobalOptions::default()
        };
        (temp, opts)
    }

    #[test]
    fn test_context_builds_with_fixture_identity() {
        let (_temp, base) = options_with_fixtures();
        let opts = GlobalOptions {
            concurrency: Some(3),
            ..base
        };

        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.config.concurrency, 3);
        assert_eq!(ctx.config.groups_url, "http://127.0.0.1:9/group");
        assert_eq!(ctx.format, OutputFormat::Csv);
    }

    #[test]
    fn test_missing_certificate_names_path() {
        let (_temp, base) = options_with_fixtures();
        let opts = GlobalOptions {
            cert: Some(PathBuf::from("/nonexistent/gpsr.crt")),
            ..base
        };

        match CommandContext::new(&opts) {
            Err(Error::Tls(TlsError::ReadFile { path, .. })) => {
                assert_eq!(path, PathBuf::from("/nonexistent/gpsr.crt"));
            }
            Err(other) => panic!("Expected ReadFile error, got {:?}", other),
            Ok(_) => panic!("Expected ReadFile error"),
        }
    }

    #[test]
    fn test_bad_department_selector_is_config_error() {
        let (temp, opts) = options_with_fixtures();
        let config_path = temp.path().join("config.yaml");
        std::fs::write(&config_path, "department_selector: \"span[\"\n").unwrap();

        assert!(matches!(
            CommandContext::new(&opts),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_zero_concurrency_rejected_before_tls() {
        let (_temp, base) = options_with_fixtures();
        let opts = GlobalOptions {
            concurrency: Some(0),
            cert: Some(PathBuf::from("/nonexistent/gpsr.crt")),
            ..base
        };

        assert!(matches!(
            CommandContext::new(&opts),
            Err(Error::Config(_))
        ));
    }
}
