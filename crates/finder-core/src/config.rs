//! Indexer endpoint configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{DEFAULT_INDEXER_URL, DEFAULT_TIMEOUT_SECS};

/// Where and how to query the indexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexerConfig {
    /// Indexer base URL, e.g. `https://cid.contact`
    ///
    /// Empty or absent means the public fallback endpoint.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Hard timeout for a single request, in milliseconds
    ///
    /// `0` means the default one minute timeout.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_SECS * 1000
}

impl IndexerConfig {
    /// Create a configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// Set the request timeout
    ///
    /// A zero duration keeps the default; anything shorter than a
    /// millisecond rounds up to one.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = if timeout.is_zero() {
            default_timeout_ms()
        } else {
            u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX).max(1)
        };
        self
    }

    /// True when no usable base URL was configured
    pub fn uses_fallback(&self) -> bool {
        self.configured_url().is_none()
    }

    /// The base URL lookups go to, without a trailing slash
    pub fn effective_base_url(&self) -> String {
        self.configured_url()
            .unwrap_or(DEFAULT_INDEXER_URL)
            .to_string()
    }

    /// Request timeout, never zero
    pub fn timeout(&self) -> Duration {
        match self.timeout_ms {
            0 => Duration::from_millis(default_timeout_ms()),
            ms => Duration::from_millis(ms),
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    fn configured_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}
