use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use crate::adapters::StringTableResolver;
use crate::app::ScreenBuilder;
use crate::domain::{DomainError, SettingRegistry, ViewConfig};
use crate::infrastructure::init_logging;
use crate::ports::ConfigStore;

/// Per-language string tables under the data directory, `strings/<language>.toml`.
const STRINGS_DIR: &str = "strings";

/// Wires the config store, logging and the shared text resolver together
/// and hands out screen builders.
pub struct SettingsController {
    config: RwLock<ViewConfig>,
    config_store: Arc<dyn ConfigStore>,
    resolver: Arc<StringTableResolver>,
    _log_guard: Option<WorkerGuard>,
}

impl SettingsController {
    /// Load configuration, start logging and load the configured string table.
    pub fn new(config_store: Arc<dyn ConfigStore>) -> Result<Self, DomainError> {
        let config = config_store.load()?;

        let log_guard = init_logging(&config_store.logs_dir(), &config.logging)?;

        let resolver = Arc::new(StringTableResolver::new());
        resolver.replace_table(Self::load_table(config_store.as_ref(), &config)?);

        info!(
            language = %config.text.language,
            strings = resolver.len(),
            "SettingsController initialized"
        );

        Ok(Self {
            config: RwLock::new(config),
            config_store,
            resolver,
            _log_guard: log_guard,
        })
    }

    /// An explicit `strings_path` wins and resolves against the data directory.
    /// Otherwise the language's table is used if one is installed.
    fn strings_path(store: &dyn ConfigStore, config: &ViewConfig) -> Option<PathBuf> {
        match &config.text.strings_path {
            Some(path) => Some(store.data_dir().join(path)),
            None => {
                let path = store
                    .data_dir()
                    .join(STRINGS_DIR)
                    .join(format!("{}.toml", config.text.language));
                path.is_file().then_some(path)
            }
        }
    }

    /// The string table `config` selects, empty when it selects none.
    fn load_table(
        store: &dyn ConfigStore,
        config: &ViewConfig,
    ) -> Result<HashMap<String, String>, DomainError> {
        match Self::strings_path(store, config) {
            Some(path) => StringTableResolver::read_table(&path),
            None => Ok(HashMap::new()),
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> ViewConfig {
        self.config.read().clone()
    }

    /// Save a new configuration, reloading strings if their source changed.
    ///
    /// The new table is read before saving and swapped in only once the save
    /// succeeds, so a failure leaves both config and strings unchanged.
    pub fn update_config(&self, config: ViewConfig) -> Result<(), DomainError> {
        let strings_changed = self.config.read().text != config.text;
        let table = if strings_changed {
            Some(Self::load_table(self.config_store.as_ref(), &config)?)
        } else {
            None
        };

        self.config_store.save(&config)?;
        if let Some(table) = table {
            self.resolver.replace_table(table);
        }
        *self.config.write() = config;

        info!(strings_changed, "Configuration updated");
        Ok(())
    }

    /// Replace the string table from TOML text, e.g. after a language switch.
    pub fn load_strings(&self, content: &str) -> Result<usize, DomainError> {
        let count = self.resolver.replace_from_toml_str(content)?;
        info!(count, "String table replaced");
        Ok(count)
    }

    /// Shared resolver, for callers that build descriptors themselves.
    pub fn resolver(&self) -> Arc<StringTableResolver> {
        Arc::clone(&self.resolver)
    }

    /// Start building a screen over `registry` with this controller's text.
    pub fn screen<'a>(&'a self, registry: &'a SettingRegistry) -> ScreenBuilder<'a> {
        ScreenBuilder::new(registry, self.resolver.as_ref())
    }

    /// Get the config file path.
    pub fn config_path(&self) -> PathBuf {
        self.config_store.config_path()
    }

    /// Get the logs directory path.
    pub fn logs_dir(&self) -> PathBuf {
        self.config_store.logs_dir()
    }
}
