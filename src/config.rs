use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime settings for the order store and the drag engine
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReorderConfig {
    /// Directory holding the persisted order record
    pub store_dir: PathBuf,
    /// Name of the persisted record
    pub record_name: String,
    /// Stacking order applied to the lifted item while dragging
    pub lifted_z_index: i32,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(".reorder"),
            record_name: "item_order".to_string(),
            lifted_z_index: 5000,
        }
    }
}

impl ReorderConfig {
    pub const STORE_DIR_ENV: &'static str = "REORDER_STORE_DIR";
    pub const RECORD_NAME_ENV: &'static str = "REORDER_RECORD_NAME";

    /// Parses settings from TOML text; absent keys keep their defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Loads settings from a TOML file, then applies environment overrides.
    ///
    /// A missing file yields defaults; a file that fails to parse is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Self::from_toml_str(&std::fs::read_to_string(path)?)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(Self::STORE_DIR_ENV).filter(|v| !v.is_empty()) {
            self.store_dir = PathBuf::from(dir);
        }
        if let Some(name) = lookup(Self::RECORD_NAME_ENV).filter(|v| !v.is_empty()) {
            self.record_name = name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReorderError;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ReorderConfig::default();
        assert_eq!(config.record_name, "item_order");
        assert_eq!(config.lifted_z_index, 5000);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ReorderConfig::from_toml_str("record_name = \"shelf\"").unwrap();
        assert_eq!(config.record_name, "shelf");
        assert_eq!(config.store_dir, PathBuf::from(".reorder"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = ReorderConfig::from_toml_str("lifted_z_index = \"high\"");
        assert!(matches!(result, Err(ReorderError::ConfigError(_))));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ReorderConfig::load(temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.lifted_z_index, 5000);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reorder.toml");
        std::fs::write(&path, "lifted_z_index = 10\n").unwrap();

        let config = ReorderConfig::load(&path).unwrap();
        assert_eq!(config.lifted_z_index, 10);
    }

    #[test]
    fn test_overrides() {
        let mut config = ReorderConfig::default();
        config.apply_overrides(|key| match key {
            ReorderConfig::STORE_DIR_ENV => Some("/tmp/orders".to_string()),
            ReorderConfig::RECORD_NAME_ENV => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.store_dir, PathBuf::from("/tmp/orders"));
        assert_eq!(config.record_name, "item_order");
    }
}
