//! Global daybook configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};

use crate::error::{DaybookError, DaybookResult};
use crate::export::DirectorySink;
use crate::store::FileStore;

static DEFAULT_DATA_DIR: &str = "~/.local/share/daybook";
static DEFAULT_EXPORT_DIR: &str = ".";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_DIR)
}

/// Configuration at ~/.config/daybook/config.toml
///
/// Every key can be overridden with a `DAYBOOK_` environment variable
/// (e.g. `DAYBOOK_DATA_DIR`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DaybookConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

impl Default for DaybookConfig {
    fn default() -> Self {
        DaybookConfig {
            data_dir: default_data_dir(),
            export_dir: default_export_dir(),
        }
    }
}

impl DaybookConfig {
    pub fn config_path() -> DaybookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DaybookError::Config("Could not determine config directory".into()))?
            .join("daybook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default config path, creating a commented-out file if
    /// none exists yet.
    pub fn load() -> DaybookResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from a specific file plus environment overrides.
    pub fn load_from(path: &Path) -> DaybookResult<Self> {
        Self::load_with_env(path, None)
    }

    /// `env` replaces the process environment when given.
    fn load_with_env(path: &Path, env: Option<Map<String, String>>) -> DaybookResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("DAYBOOK").source(env))
            .build()
            .map_err(|e| DaybookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DaybookError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DaybookResult<()> {
        let contents = format!(
            "\
# daybook configuration

# Where events are stored:
# data_dir = \"{}\"

# Where `daybook export` writes files:
# export_dir = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_EXPORT_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DaybookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DaybookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Serialize the effective configuration as TOML.
    pub fn to_toml(&self) -> DaybookResult<String> {
        toml::to_string_pretty(self).map_err(|e| DaybookError::Config(e.to_string()))
    }

    pub fn data_path(&self) -> PathBuf {
        expand(&self.data_dir)
    }

    pub fn export_path(&self) -> PathBuf {
        expand(&self.export_dir)
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.data_path())
    }

    pub fn export_sink(&self) -> DirectorySink {
        DirectorySink::new(self.export_path())
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daybook/config.toml");

        DaybookConfig::create_default_config(&path).unwrap();
        let config = DaybookConfig::load_from(&path).unwrap();

        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.export_dir, PathBuf::from("."));
    }

    #[test]
    fn test_load_reads_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/tmp/daybook-data\"\n").unwrap();

        let config = DaybookConfig::load_from(&path).unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/tmp/daybook-data"));
        assert_eq!(config.export_dir, PathBuf::from("."));
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/from-file\"\nexport_dir = \"/tmp/exports\"\n",
        )
        .unwrap();

        let env = Map::from([
            ("DAYBOOK_DATA_DIR".to_string(), "/tmp/from-env".to_string()),
            ("OTHER_EXPORT_DIR".to_string(), "/tmp/ignored".to_string()),
        ]);

        let config = DaybookConfig::load_with_env(&path, Some(env)).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/from-env"));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_to_toml() {
        let toml = DaybookConfig::default().to_toml().unwrap();
        assert!(toml.contains("data_dir = \"~/.local/share/daybook\""));
    }
}
