//! Client configuration
//!
//! A [`ClientConfig`] is validated once at construction and never changes
//! afterwards. It can be built directly, from environment variables, or from
//! a JSON file.

use crate::auth::Credentials;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable holding the API base URL
pub const ENV_API_URL: &str = "VIBIFY_API_URL";

/// Environment variable holding the application token
pub const ENV_APPLICATION_ID: &str = "APPLICATION_ID";

/// Environment variable holding the user token
pub const ENV_API_KEY: &str = "VIBIFY_API_KEY";

/// Immutable connection settings for a gateway
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    credentials: Credentials,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ClientConfig {
    /// Create a config from a base URL and optional tokens.
    ///
    /// At least one token must be present; the base URL must be absolute.
    pub fn new(
        base_url: impl Into<String>,
        application_token: Option<String>,
        user_token: Option<String>,
    ) -> Result<Self> {
        let credentials = Credentials::new(application_token, user_token)?;
        Self::with_credentials(base_url, credentials)
    }

    /// Create a config from already-validated credentials
    pub fn with_credentials(base_url: impl Into<String>, credentials: Credentials) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)?;

        let base_url = base_url
            .strip_suffix('/')
            .map(str::to_string)
            .unwrap_or(base_url);

        Ok(Self {
            base_url,
            credentials,
            timeout: None,
            user_agent: default_user_agent(),
        })
    }

    /// Load the config from `VIBIFY_API_URL`, `APPLICATION_ID` and `VIBIFY_API_KEY`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the config using a custom variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_API_URL).ok_or_else(|| Error::missing_field(ENV_API_URL))?;
        Self::new(base_url, lookup(ENV_APPLICATION_ID), lookup(ENV_API_KEY))
    }

    /// Load the config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        ConfigFile::load(path)?.into_config()
    }

    /// Set a transport timeout applied to every request
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the User-Agent header
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn application_token(&self) -> Option<&str> {
        self.credentials.application_token()
    }

    pub fn user_token(&self) -> Option<&str> {
        self.credentials.user_token()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn default_user_agent() -> String {
    format!("vibify/{}", crate::VERSION)
}

// ============================================================================
// Config File
// ============================================================================

/// On-disk JSON form of the client configuration
///
/// Every field is optional so that a file can be layered under CLI flags and
/// environment variables; [`ConfigFile::into_config`] enforces the invariants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL for all requests
    #[serde(default)]
    pub base_url: Option<String>,

    /// Application token (`x-application-id`)
    #[serde(default)]
    pub application_token: Option<String>,

    /// User token (`x-api-key`)
    #[serde(default)]
    pub user_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Read and parse a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse config file contents
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::config(format!("Invalid config JSON: {e}")))
    }

    /// Fill unset fields from `other`, keeping the values already present
    #[must_use]
    pub fn or(self, other: ConfigFile) -> Self {
        Self {
            base_url: self.base_url.or(other.base_url),
            application_token: self.application_token.or(other.application_token),
            user_token: self.user_token.or(other.user_token),
            timeout_secs: self.timeout_secs.or(other.timeout_secs),
        }
    }

    /// Validate into a [`ClientConfig`]
    pub fn into_config(self) -> Result<ClientConfig> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::missing_field("base_url"))?;
        let config = ClientConfig::new(base_url, self.application_token, self.user_token)?;

        Ok(match self.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        })
    }
}
