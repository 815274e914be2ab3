/*
[INPUT]:  YAML configuration file, environment variables, CLI overrides
[OUTPUT]: Resolved credentials and client configuration
[POS]:    Configuration layer - credential and endpoint setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use dmarket_client::{ClientConfig, Credentials, DmarketClient};
use serde::{Deserialize, Serialize};

/// File-level configuration. Every field is optional so the file can hold
/// only part of the settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// Public API key, sent as X-Api-Key
    #[serde(default)]
    pub public_key: Option<String>,
    /// Hex-encoded Ed25519 secret key
    #[serde(default)]
    pub secret_key: Option<String>,
    /// API base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Command-line overrides, applied last
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content).context("parse config yaml")?;
        Ok(config)
    }

    /// Credentials from the environment win over file values. They apply as
    /// a pair; `None` leaves the file values in place.
    pub fn apply_env(mut self, credentials: Option<Credentials>) -> Self {
        if let Some(credentials) = credentials {
            self.public_key = Some(credentials.public_key().to_string());
            self.secret_key = Some(credentials.expose_secret().to_string());
        }
        self
    }

    /// Command-line flags win over everything else
    pub fn apply_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(base_url) = &overrides.base_url {
            self.base_url = Some(base_url.clone());
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = Some(timeout_secs);
        }
        self
    }

    /// Validated client configuration. A zero timeout keeps the default.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs.filter(|secs| *secs > 0) {
            config.timeout = Duration::from_secs(timeout_secs);
        }
        config
    }

    /// Build a client, failing before any network access if credentials are missing
    pub fn build_client(&self) -> dmarket_client::Result<DmarketClient> {
        let credentials = Credentials::new(
            self.public_key.clone().unwrap_or_default(),
            self.secret_key.clone().unwrap_or_default(),
        )?;
        DmarketClient::with_config(credentials, self.client_config())
    }
}
