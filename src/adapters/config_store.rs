use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::{DomainError, ViewConfig};
use crate::ports::ConfigStore;

const APP_DIR: &str = "SettingView";
const CONFIG_FILE: &str = "settingview.toml";

/// TOML-based store for [`ViewConfig`] with OS-specific paths.
pub struct TomlConfigStore {
    data_dir: PathBuf,
}

impl TomlConfigStore {
    /// Create a new TomlConfigStore.
    /// Uses OS-specific application config directories.
    pub fn new() -> Result<Self, DomainError> {
        let data_dir = Self::get_data_dir()?;
        Self::at(data_dir)
    }

    /// Create a store rooted at `data_dir`, creating it if needed.
    pub fn at(data_dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;

        info!(data_dir = ?data_dir, "ConfigStore initialized");

        Ok(Self { data_dir })
    }

    /// Get the OS-specific configuration directory.
    /// - macOS: ~/Library/Application Support/SettingView/
    /// - Windows: %APPDATA%\SettingView\
    /// - Linux: ~/.config/SettingView/
    fn get_data_dir() -> Result<PathBuf, DomainError> {
        #[cfg(target_os = "macos")]
        let base = dirs::data_dir();

        #[cfg(not(target_os = "macos"))]
        let base = dirs::config_dir();

        base.map(|p| p.join(APP_DIR))
            .ok_or_else(|| DomainError::Config("Could not find configuration directory".to_string()))
    }

    /// Get the OS-specific log directory.
    /// - macOS: ~/Library/Application Support/SettingView/logs/
    /// - Windows: %LOCALAPPDATA%\SettingView\logs\
    /// - Linux: ~/.local/share/SettingView/logs/
    fn get_logs_dir(&self) -> PathBuf {
        #[cfg(target_os = "macos")]
        {
            self.data_dir.join("logs")
        }

        #[cfg(target_os = "windows")]
        {
            dirs::data_local_dir()
                .map(|p| p.join(APP_DIR).join("logs"))
                .unwrap_or_else(|| self.data_dir.join("logs"))
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            dirs::data_dir()
                .map(|p| p.join(APP_DIR).join("logs"))
                .unwrap_or_else(|| self.data_dir.join("logs"))
        }
    }
}

impl ConfigStore for TomlConfigStore {
    fn load(&self) -> Result<ViewConfig, DomainError> {
        let config_path = self.config_path();

        if config_path.exists() {
            debug!(path = ?config_path, "Loading configuration");
            let content = fs::read_to_string(&config_path)?;
            let config: ViewConfig = toml::from_str(&content)?;
            info!(path = ?config_path, "Configuration loaded");
            Ok(config)
        } else {
            info!(path = ?config_path, "Configuration file not found, creating default");
            let config = ViewConfig::new();
            self.save(&config)?;
            Ok(config)
        }
    }

    fn save(&self, config: &ViewConfig) -> Result<(), DomainError> {
        let config_path = self.config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&config_path, content)?;

        info!(path = ?config_path, "Configuration saved");
        Ok(())
    }

    fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    fn logs_dir(&self) -> PathBuf {
        self.get_logs_dir()
    }
}
