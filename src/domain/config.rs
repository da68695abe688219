use serde::{Deserialize, Serialize};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Enable file logging with rotation.
    pub file_logging: bool,
    /// Maximum number of log files to keep.
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_logging: false,
            max_files: 7,
        }
    }
}

/// Text resolution configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Language tag of the string table to load (e.g. "en", "fr").
    pub language: String,
    /// Optional path to a TOML string table with a `[strings]` section.
    pub strings_path: Option<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            strings_path: None,
        }
    }
}

/// Configuration of the settings view layer itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewConfig {
    pub logging: LoggingConfig,
    pub text: TextConfig,
}

impl ViewConfig {
    /// Create a new ViewConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_config_defaults() {
        let config = ViewConfig::new();
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.file_logging);
        assert_eq!(config.text.language, "en");
        assert!(config.text.strings_path.is_none());
    }

    #[test]
    fn test_view_config_partial_toml() {
        let config: ViewConfig = toml::from_str(
            r#"
            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.max_files, 7);
        assert_eq!(config.text, TextConfig::default());
    }
}
