use std::path::PathBuf;

use crate::domain::{DomainError, ViewConfig};

/// Port for loading and saving the library's own configuration.
///
/// This covers `ViewConfig` only; setting values stay behind
/// [`ConfigSnapshot`](crate::ports::ConfigSnapshot).
pub trait ConfigStore: Send + Sync {
    /// Load configuration from persistent storage.
    /// Creates default config if none exists.
    fn load(&self) -> Result<ViewConfig, DomainError>;

    /// Save configuration to persistent storage.
    fn save(&self, config: &ViewConfig) -> Result<(), DomainError>;

    /// Get the path to the configuration file.
    fn config_path(&self) -> PathBuf;

    /// Get the path to the data directory.
    fn data_dir(&self) -> PathBuf;

    /// Get the path to the logs directory.
    fn logs_dir(&self) -> PathBuf;
}
