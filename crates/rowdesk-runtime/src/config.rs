use crate::{Error, Result};
use rowdesk_types::{DEFAULT_PAGE_SIZE, DEFAULT_SEED_COUNT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ROWDESK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.rowdesk (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("ROWDESK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("rowdesk"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".rowdesk"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_seed_count() -> usize {
    DEFAULT_SEED_COUNT
}

fn default_db_file() -> String {
    "rowdesk.db".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Database file name, relative to the data directory.
    #[serde(default = "default_db_file")]
    pub db_file: String,
    /// Records written on the first-ever open.
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_file: default_db_file(),
            seed_count: default_seed_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `config.toml` from a data directory.
    pub fn load_in(data_dir: &Path) -> Result<Self> {
        Self::load_from(&data_dir.join(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn db_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.store.db_file)
    }

    /// Page size with zero treated as one.
    pub fn page_size(&self) -> usize {
        self.table.page_size.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.table.page_size, 10);
        assert_eq!(config.store.seed_count, 1000);
        assert_eq!(config.store.db_file, "rowdesk.db");
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.table.page_size = 25;
        config.store.seed_count = 50;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "[table]\npage_size = 5\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.table.page_size, 5);
        assert_eq!(config.store, StoreConfig::default());

        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "[table\npage_size = ")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_in(temp_dir.path())?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_zero_page_size_is_raised() {
        let mut config = Config::default();
        config.table.page_size = 0;
        assert_eq!(config.page_size(), 1);
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_workspace_path(Some("/tmp/rowdesk-explicit"))?;
        assert_eq!(path, PathBuf::from("/tmp/rowdesk-explicit"));
        Ok(())
    }
}
