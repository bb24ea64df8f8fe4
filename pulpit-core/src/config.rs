//! User-level configuration.
//!
//! Lives at `~/.config/pulpit/config.toml` and is created with defaults on
//! first load. The remote section names the provider binary and carries
//! opaque params forwarded with every protocol request.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{PulpitError, PulpitResult};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PulpitConfig {
    /// Where mutations get pushed to and state is loaded from.
    /// `None` until the user configures a provider.
    pub remote: Option<RemoteConfig>,
    /// Overrides the built-in default display color for new series.
    pub default_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Provider short name; resolves to a `pulpit-provider-<name>` binary.
    pub provider: String,
    /// Provider-specific params (accounts, table names, …), passed through
    /// untouched.
    #[serde(default)]
    pub params: HashMap<String, toml::Value>,
}

impl PulpitConfig {
    pub fn config_path() -> PulpitResult<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| PulpitError::Config("Could not determine config directory".into()))?;
        Ok(dir.join("pulpit/config.toml"))
    }

    pub fn load() -> PulpitResult<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::default().save_to(&path)?;
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> PulpitResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| PulpitError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PulpitError::Config(e.to_string()))
    }

    pub fn save(&self) -> PulpitResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> PulpitResult<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| PulpitError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut params = HashMap::new();
        params.insert(
            "local_account".to_string(),
            toml::Value::String("me@example.com".to_string()),
        );
        let config = PulpitConfig {
            remote: Some(RemoteConfig {
                provider: "local".to_string(),
                params,
            }),
            default_color: Some("#0ea5e9".to_string()),
        };

        config.save_to(&path).unwrap();
        let loaded = PulpitConfig::load_from(&path).unwrap();

        let remote = loaded.remote.unwrap();
        assert_eq!(remote.provider, "local");
        assert_eq!(
            remote.params.get("local_account"),
            Some(&toml::Value::String("me@example.com".to_string()))
        );
        assert_eq!(loaded.default_color.as_deref(), Some("#0ea5e9"));
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PulpitConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert!(config.remote.is_none());
    }
}
