//! Runtime configuration for backend selection and credentials.
//!
//! Sources (highest priority first):
//! 1. Environment variables (REELCAST_*)
//! 2. YAML config file, when a path is given
//! 3. Defaults (fixture backend, 30 s fetch timeout)
//!
//! The resolved config is passed explicitly to construction sites; there
//! is no process-global.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::adapters::remote::RemoteConfig;

/// Which record-store backend to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// In-memory demo catalog
    Fixture,
    /// Hosted record store over HTTP
    Remote,
}

impl std::str::FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fixture" | "mock" => Ok(BackendKind::Fixture),
            "remote" => Ok(BackendKind::Remote),
            _ => anyhow::bail!("Unknown backend: {} (expected fixture or remote)", s),
        }
    }
}

fn default_backend() -> BackendKind {
    BackendKind::Fixture
}

fn default_fetch_timeout() -> u64 {
    30
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_backend")]
    pub backend: BackendKind,

    /// Required when `backend` is `remote`
    #[serde(default)]
    pub remote: Option<RemoteConfig>,

    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_seconds: u64,

    /// Signed-in user id, if any
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            remote: None,
            fetch_timeout_seconds: default_fetch_timeout(),
            user_id: None,
        }
    }
}

impl Config {
    /// Load configuration: file (if given), then env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                serde_yaml::from_str(&content).context("Failed to parse config YAML")?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment-style overrides via a lookup function.
    pub fn apply_overrides(&mut self, get: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(backend) = get("REELCAST_BACKEND") {
            self.backend = backend.parse()?;
        }
        if let Some(base_url) = get("REELCAST_BASE_URL") {
            let api_key = get("REELCAST_API_KEY")
                .or_else(|| self.remote.as_ref().map(|r| r.api_key.clone()))
                .unwrap_or_default();
            self.remote = Some(RemoteConfig { base_url, api_key });
        } else if let Some(api_key) = get("REELCAST_API_KEY") {
            if let Some(remote) = self.remote.as_mut() {
                remote.api_key = api_key;
            }
        }
        if let Some(timeout) = get("REELCAST_TIMEOUT_SECONDS") {
            self.fetch_timeout_seconds = timeout
                .parse()
                .context("REELCAST_TIMEOUT_SECONDS is not a number")?;
        }
        if let Some(user_id) = get("REELCAST_USER_ID") {
            self.user_id = Some(user_id);
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.backend == BackendKind::Remote {
            let remote = self
                .remote
                .as_ref()
                .context("remote backend selected but no remote settings given")?;
            if remote.base_url.trim().is_empty() {
                anyhow::bail!("remote backend selected but base_url is empty");
            }
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend, BackendKind::Fixture);
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
        assert!(config.remote.is_none());
        assert!(config.user_id.is_none());
    }

    #[test]
    fn test_load_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            concat!(
                "backend: remote\n",
                "remote:\n",
                "  base_url: https://project.example.co\n",
                "  api_key: anon-key\n",
                "fetch_timeout_seconds: 10\n",
                "user_id: user-1\n",
            )
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.backend, BackendKind::Remote);
        assert_eq!(config.fetch_timeout_seconds, 10);
        assert_eq!(config.user_id.as_deref(), Some("user-1"));
        assert_eq!(
            config.remote.unwrap().base_url,
            "https://project.example.co"
        );
    }

    #[test]
    fn test_env_overrides_take_priority() {
        let mut config = Config::default();
        config
            .apply_overrides(|key| match key {
                "REELCAST_BACKEND" => Some("remote".to_string()),
                "REELCAST_BASE_URL" => Some("https://other.example.co".to_string()),
                "REELCAST_API_KEY" => Some("key-2".to_string()),
                "REELCAST_TIMEOUT_SECONDS" => Some("5".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.backend, BackendKind::Remote);
        assert_eq!(config.fetch_timeout_seconds, 5);
        let remote = config.remote.unwrap();
        assert_eq!(remote.base_url, "https://other.example.co");
        assert_eq!(remote.api_key, "key-2");
    }

    #[test]
    fn test_remote_backend_requires_settings() {
        let config = Config {
            backend: BackendKind::Remote,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_backend_kind_from_str() {
        assert_eq!("fixture".parse::<BackendKind>().unwrap(), BackendKind::Fixture);
        assert_eq!("mock".parse::<BackendKind>().unwrap(), BackendKind::Fixture);
        assert_eq!("Remote".parse::<BackendKind>().unwrap(), BackendKind::Remote);
        assert!("postgres".parse::<BackendKind>().is_err());
    }
}
