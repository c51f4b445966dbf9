//! Service configuration: YAML files with `${VAR}` substitution.
//!
//! Values like `api_key: "${KAKAO_REST_API_KEY}"` are resolved from the
//! environment before deserialization; `${VAR:-default}` supplies a
//! fallback for unset variables.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{MaruError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaruConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session lifetime; refreshed on each successful validation.
    pub ttl_seconds: u64,
    /// Bound on a disconnected session's pending queue.
    pub max_pending_messages: usize,
    /// Period of the background expiry sweep.
    pub sweep_interval_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub base_url: String,
    /// REST key for the local-search API; blank disables the client.
    pub api_key: String,
    pub timeout_seconds: u64,
    /// Result count requested per search.
    pub page_size: usize,
}

impl Default for MaruConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            session: SessionConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 3600,
            max_pending_messages: 256,
            sweep_interval_seconds: 60,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dapi.kakao.com".into(),
            api_key: String::new(),
            timeout_seconds: 5,
            page_size: 5,
        }
    }
}

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").unwrap()
});

/// Replace `${VAR}` / `${VAR:-default}` with environment values.
fn substitute_env(raw: &str) -> String {
    ENV_VAR
        .replace_all(raw, |caps: &Captures<'_>| {
            let fallback = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            std::env::var(&caps[1]).unwrap_or_else(|_| fallback.to_string())
        })
        .into_owned()
}

impl MaruConfig {
    /// Parse a YAML document, resolving environment placeholders first.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let resolved = substitute_env(raw);
        serde_yaml::from_str(&resolved).map_err(|e| MaruError::Config(e.to_string()))
    }

    /// Load from a file. A missing file falls back to defaults with a
    /// logged warning; a malformed file is an error.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_yaml_str(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(MaruError::Config(format!(
                "cannot read {}: {e}",
                path.display()
            ))),
        }
    }

    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.session.ttl_seconds as i64)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
