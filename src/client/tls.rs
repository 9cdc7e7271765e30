//! Mutual-TLS HTTP client construction
//!
//! Both the group service and the person directory authenticate callers by
//! client certificate. The client built here presents that certificate on
//! every connection and never reuses idle connections, so each request runs
//! its own TLS handshake.
//!
//! The group service may request the client certificate through a TLS
//! renegotiation. The default `native-tls` feature uses the platform stack
//! (OpenSSL on Linux), which accepts a server-initiated renegotiation as a
//! client. Building with `--no-default-features` switches to rustls, which
//! has no renegotiation support and only suits endpoints that ask for the
//! certificate in the initial handshake.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{Certificate, Client as HttpClient, Identity};

use crate::config::Config;
use crate::error::{Result, TlsError};

/// Inputs for [`build_http_client`]
#[derive(Debug, Clone)]
pub struct TlsSettings {
    pub cert_file: PathBuf,
    pub key_file: PathBuf,
    pub ca_bundle: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

impl TlsSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            cert_file: config.cert_file.clone(),
            key_file: config.key_file.clone(),
            ca_bundle: config.ca_bundle.clone(),
            timeout: config.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Build the shared HTTP client.
///
/// Fails before any network traffic if the certificate, key or CA bundle
/// cannot be read or parsed.
pub fn build_http_client(settings: &TlsSettings) -> Result<HttpClient> {
    let cert = read_pem(&settings.cert_file)?;
    let key = read_pem(&settings.key_file)?;

    let identity = load_identity(&cert, &key).map_err(|message| TlsError::InvalidIdentity {
        cert: settings.cert_file.clone(),
        key: settings.key_file.clone(),
        message,
    })?;

    let mut builder = HttpClient::builder()
        .identity(identity)
        .pool_max_idle_per_host(0)
        .user_agent(concat!("gpsr/", env!("CARGO_PKG_VERSION")));

    #[cfg(feature = "native-tls")]
    {
        builder = builder.use_native_tls();
    }
    #[cfg(not(feature = "native-tls"))]
    {
        builder = builder.use_rustls_tls();
    }

    if let Some(ref path) = settings.ca_bundle {
        for cert in load_ca_bundle(path)? {
            builder = builder.add_root_certificate(cert);
        }
    }

    if let Some(timeout) = settings.timeout {
        builder = builder.timeout(timeout);
    }

    let client = builder.build().map_err(|e| TlsError::Build(e.to_string()))?;

    log::debug!(
        "Built mTLS client with certificate {}",
        settings.cert_file.display()
    );

    Ok(client)
}

fn read_pem(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path)
        .map_err(|source| {
            TlsError::ReadFile {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
}

#[cfg(not(feature = "native-tls"))]
fn load_identity(cert: &[u8], key: &[u8]) -> std::result::Result<Identity, String> {
    // rustls takes a single PEM buffer holding the key and the chain
    let mut pem = Vec::with_capacity(cert.len() + key.len() + 1);
    pem.extend_from_slice(key);
    pem.push(b'\n');
    pem.extend_from_slice(cert);
    Identity::from_pem(&pem).map_err(|e| e.to_string())
}

#[cfg(feature = "native-tls")]
fn load_identity(cert: &[u8], key: &[u8]) -> std::result::Result<Identity, String> {
    // native-tls only takes PKCS#8; PKCS#1 and SEC1 keys are rewrapped first
    let key = super::keys::to_pkcs8_pem(key)?;
    Identity::from_pkcs8_pem(cert, &key).map_err(|e| e.to_string())
}

fn load_ca_bundle(path: &Path) -> Result<Vec<Certificate>> {
    let pem = read_pem(path)?;
    let certs = Certificate::from_pem_bundle(&pem).map_err(|e| TlsError::InvalidCaBundle {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if certs.is_empty() {
        return Err(TlsError::InvalidCaBundle {
            path: path.to_path_buf(),
            message: "no certificates found".to_string(),
        }
        .into());
    }

    Ok(certs)
}
