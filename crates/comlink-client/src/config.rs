/*
[INPUT]:  YAML configuration file, COMLINK_* environment variables
[OUTPUT]: Parsed client configuration
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::Span;

use crate::http::{ComlinkError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_STATS_BASE_URL: &str = "http://localhost:3223";

pub const ENV_BASE_URL: &str = "COMLINK_URL";
pub const ENV_STATS_BASE_URL: &str = "COMLINK_STATS_URL";
pub const ENV_ACCESS_KEY: &str = "COMLINK_ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "COMLINK_SECRET_KEY";
pub const ENV_COMPRESSION: &str = "COMLINK_COMPRESSION";
pub const ENV_TIMEOUT_SECS: &str = "COMLINK_TIMEOUT_SECS";

/// Client configuration
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Primary API host
    pub base_url: String,
    /// Unit stats host
    pub stats_base_url: String,
    /// HMAC access key; signing is enabled only with both keys set
    pub access_key: String,
    /// HMAC secret key
    pub secret_key: String,
    /// Request compressed responses and decompress them
    pub compression_enabled: bool,
    /// Whole-request timeout handed to the transport; none by default
    pub timeout_secs: Option<u64>,
    /// Span every dispatch runs in
    #[serde(skip, default = "Span::none")]
    pub span: Span,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            stats_base_url: DEFAULT_STATS_BASE_URL.to_string(),
            access_key: String::new(),
            secret_key: String::new(),
            compression_enabled: true,
            timeout_secs: None,
            span: Span::none(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.secret_key.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("stats_base_url", &self.stats_base_url)
            .field("access_key", &self.access_key)
            .field("secret_key", &secret)
            .field("compression_enabled", &self.compression_enabled)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ComlinkError::Config(format!("failed to read {path}: {e}")))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| ComlinkError::Config(format!("invalid config: {e}")))
    }

    /// Defaults overlaid with any `COMLINK_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values produced by `lookup` (an environment reader) onto `self`
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(url) = lookup(ENV_STATS_BASE_URL) {
            self.stats_base_url = url;
        }
        if let Some(key) = lookup(ENV_ACCESS_KEY) {
            self.access_key = key;
        }
        if let Some(key) = lookup(ENV_SECRET_KEY) {
            self.secret_key = key;
        }
        if let Some(raw) = lookup(ENV_COMPRESSION) {
            self.compression_enabled = parse_bool(&raw).ok_or_else(|| {
                ComlinkError::Config(format!("{ENV_COMPRESSION} must be a boolean, got {raw:?}"))
            })?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                ComlinkError::Config(format!("{ENV_TIMEOUT_SECS} must be seconds: {e}"))
            })?;
            self.timeout_secs = Some(secs);
        }
        Ok(self)
    }

    pub fn with_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = access_key.into();
        self.secret_key = secret_key.into();
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Exactly one of the two keys is set
    pub fn has_partial_credentials(&self) -> bool {
        self.access_key.is_empty() != self.secret_key.is_empty()
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.stats_base_url, "http://localhost:3223");
        assert!(config.access_key.is_empty());
        assert!(config.secret_key.is_empty());
        assert!(config.compression_enabled);
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_from_yaml_fills_missing_fields() {
        let yaml = "base_url: http://comlink:3000\n\
                    access_key: ak\n\
                    secret_key: sk\n\
                    compression_enabled: false\n";
        let config = ClientConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.base_url, "http://comlink:3000");
        assert_eq!(config.stats_base_url, DEFAULT_STATS_BASE_URL);
        assert_eq!(config.access_key, "ak");
        assert_eq!(config.secret_key, "sk");
        assert!(!config.compression_enabled);
    }

    #[test]
    fn test_from_yaml_rejects_bad_types() {
        let err = ClientConfig::from_yaml("compression_enabled: [1]").unwrap_err();
        assert!(matches!(err, ComlinkError::Config(_)));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_BASE_URL, "http://env:3000"),
            (ENV_SECRET_KEY, "sk"),
            (ENV_ACCESS_KEY, "ak"),
            (ENV_COMPRESSION, "off"),
            (ENV_TIMEOUT_SECS, "15"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::default()
            .with_env_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.base_url, "http://env:3000");
        assert_eq!(config.stats_base_url, DEFAULT_STATS_BASE_URL);
        assert_eq!(config.access_key, "ak");
        assert!(!config.compression_enabled);
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_env_overrides_reject_garbage() {
        let err = ClientConfig::default()
            .with_env_overrides(|key| (key == ENV_COMPRESSION).then(|| "maybe".to_string()))
            .unwrap_err();
        assert!(matches!(err, ComlinkError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::default().with_credentials("ak", "super-secret");
        let rendered = format!("{config:?}");
        assert!(rendered.contains("ak"));
        assert!(!rendered.contains("super-secret"));
        assert!(!config.has_partial_credentials());
        assert!(ClientConfig::default().with_credentials("ak", "").has_partial_credentials());
    }
}
