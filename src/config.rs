//! Configuration module for bmarkr
//!
//! Manages application configuration: where the bookmarks file lives, where
//! the pre-mutation backup is written, and the default quiet setting.
//! Configuration is stored in the user's config directory.

use std::fs;
use std::path::PathBuf;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct BmarkrConfig {
    /// Bookmarks file to operate on; falls back to the Safari default
    #[serde(default)]
    pub bookmarks_path: Option<PathBuf>,

    /// Where the pre-mutation backup copy is written
    #[serde(default)]
    pub backup_path: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl BmarkrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("bmarkr").join("config.toml"))
    }

    /// Load configuration from file, creating a default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// The bookmarks file to operate on: the configured override, else
    /// Safari's store under the user's home directory
    #[must_use]
    pub fn store_path(&self) -> Option<PathBuf> {
        self.bookmarks_path.clone().or_else(|| {
            dirs::home_dir().map(|home| home.join("Library/Safari/Bookmarks.plist"))
        })
    }

    /// Where the backup copy goes: the configured path, else
    /// `Bookmarks.plist` in the working directory
    #[must_use]
    pub fn backup_target(&self) -> PathBuf {
        self.backup_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("Bookmarks.plist"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backup_target_is_cwd_file() {
        let config = BmarkrConfig::default();
        assert_eq!(config.backup_target(), PathBuf::from("Bookmarks.plist"));
    }

    #[test]
    fn test_configured_paths_win() {
        let config = BmarkrConfig {
            bookmarks_path: Some(PathBuf::from("/tmp/b.plist")),
            backup_path: Some(PathBuf::from("/tmp/b.bak")),
            quiet: false,
        };
        assert_eq!(config.store_path(), Some(PathBuf::from("/tmp/b.plist")));
        assert_eq!(config.backup_target(), PathBuf::from("/tmp/b.bak"));
    }

    #[test]
    fn test_config_roundtrip_through_toml() {
        let config = BmarkrConfig {
            bookmarks_path: Some(PathBuf::from("/tmp/b.plist")),
            backup_path: None,
            quiet: true,
        };
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: BmarkrConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.bookmarks_path, config.bookmarks_path);
        assert!(parsed.quiet);
    }
}
