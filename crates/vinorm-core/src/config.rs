//! Configuration structures for the normalizer.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{NormError, NormResult};
use crate::traits::NormalizeOptions;

/// Top-level normalizer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Where rule, mapping and dictionary tables come from.
    #[serde(default)]
    pub resources: ResourceConfig,

    /// Default per-call options.
    #[serde(default)]
    pub options: NormalizeOptions,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl NormalizerConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> NormResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> NormResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| NormError::load(path, e))?;
        Self::from_json_str(&content)
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> NormResult<()> {
        if let Some(dir) = &self.resources.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(NormError::config("resources.data_dir must not be empty"));
            }
        }
        if self.logging.level.trim().is_empty() {
            return Err(NormError::config("logging.level must not be empty"));
        }
        Ok(())
    }
}

/// Table source configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Directory with `RegexRule/`, `Mapping/` and `Dict/`.
    /// `None` uses the tables compiled into the binary.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format (json or text).
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_normalizer_config_default() {
        let config = NormalizerConfig::default();
        assert!(config.resources.data_dir.is_none());
        assert_eq!(config.options, NormalizeOptions::default());
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn test_config_from_json() {
        let config = NormalizerConfig::from_json_str(
            r#"{
                "resources": { "data_dir": "/opt/vinorm/data" },
                "options": { "keep_punctuation": true },
                "logging": { "level": "debug" }
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.resources.data_dir.as_deref(),
            Some(Path::new("/opt/vinorm/data"))
        );
        assert!(config.options.keep_punctuation);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn test_config_rejects_empty_values() {
        let err = NormalizerConfig::from_json_str(r#"{"resources": {"data_dir": ""}}"#)
            .unwrap_err();
        assert!(matches!(err, NormError::Config(_)));

        let err =
            NormalizerConfig::from_json_str(r#"{"logging": {"level": " "}}"#).unwrap_err();
        assert!(matches!(err, NormError::Config(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"options": {{"rule_only": true}}}}"#).unwrap();

        let config = NormalizerConfig::from_file(file.path()).unwrap();
        assert!(config.options.rule_only);

        let err = NormalizerConfig::from_file("/nonexistent/vinorm.json").unwrap_err();
        assert!(matches!(err, NormError::Load { .. }));
    }
}
