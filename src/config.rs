//! YAML configuration file support for qrcontent.
//!
//! One file carries the classifier switches, display-text overrides and
//! logging setup for the binary.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "kiosk scanner"
//!
//! classifier:
//!   version: 1
//!   accept_ftp_urls: false
//!   max_payload_chars: 4096
//!
//! labels:
//!   title.wifi: "Red Wi-Fi"
//!   action.wifi: "Conectar"
//!   wifi_password: "Clave:"
//!
//! log_level: "info"
//! log_format: "json"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use payload::{ClassifierConfig, ConfigError, LabelCatalog, LabelError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("invalid classifier config: {0}")]
    Classifier(#[from] ConfigError),
}

impl From<LabelError> for ConfigLoadError {
    fn from(value: LabelError) -> Self {
        ConfigLoadError::Validation(format!("labels: {value}"))
    }
}

/// How the binary formats its log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct QrConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Display-text overrides keyed by label name (`title.sms`, `wifi_ssid`, ...)
    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

impl QrConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: QrConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the label provider described by the `labels` section.
    pub fn label_catalog(&self) -> Result<LabelCatalog, ConfigLoadError> {
        Ok(LabelCatalog::from_names(&self.labels)?)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.classifier.validate()?;
        self.label_catalog()?;

        if self.log_level.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "log_level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            classifier: ClassifierConfig::default(),
            labels: BTreeMap::new(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
