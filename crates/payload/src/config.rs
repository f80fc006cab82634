//! Configuration types for payload classification.
//!
//! [`ClassifierConfig`] holds the handful of policy switches the classifier
//! consults. It is cheap to clone and serializes cleanly from JSON, TOML or
//! YAML, so the surrounding application can keep it next to its own settings.
//!
//! # Quick Start
//!
//! ```rust
//! use payload::ClassifierConfig;
//!
//! let config = ClassifierConfig::default();
//! config.validate().expect("default config is valid");
//! ```
//!
//! # Strict Configuration
//!
//! ```rust
//! use payload::ClassifierConfig;
//!
//! let config = ClassifierConfig {
//!     version: 1,
//!     accept_ftp_urls: true,
//!     max_payload_chars: Some(4296),
//! };
//! assert!(config.validate().is_ok());
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Runtime configuration for classification.
///
/// # Serialization
///
/// ```json
/// {
///   "version": 1,
///   "accept_ftp_urls": false,
///   "max_payload_chars": 4296
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use payload::ClassifierConfig;
///
/// let config = ClassifierConfig::default();
/// assert_eq!(config.version, 1);
/// assert!(!config.accept_ftp_urls);
/// assert!(config.max_payload_chars.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Version of the classification rules.
    ///
    /// Bump this when a rule change alters which variant a payload maps to,
    /// so stored results can be told apart.
    ///
    /// Default: `1`
    pub version: u32,

    /// Whether `ftp://` URLs classify as web URLs.
    ///
    /// Scanners have disagreed on this over time. When `false` an `ftp://`
    /// payload falls through to plain text; when `true` it is treated like any
    /// other web URL and is never re-prefixed with `http://`.
    ///
    /// Default: `false`
    pub accept_ftp_urls: bool,

    /// Maximum payload length, in characters, that receives structured parsing.
    ///
    /// Longer payloads are classified as plain text without running any
    /// format-specific predicate. Classification stays total either way.
    ///
    /// Default: `None` (unlimited)
    pub max_payload_chars: Option<usize>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            version: 1,
            accept_ftp_urls: false,
            max_payload_chars: None,
        }
    }
}

impl ClassifierConfig {
    /// Checks the configuration for values that can never be meaningful.
    ///
    /// ```rust
    /// use payload::{ClassifierConfig, ConfigError};
    ///
    /// let bad = ClassifierConfig { max_payload_chars: Some(0), ..Default::default() };
    /// assert_eq!(bad.validate(), Err(ConfigError::ZeroPayloadLimit));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 {
            return Err(ConfigError::InvalidVersion);
        }
        if self.max_payload_chars == Some(0) {
            return Err(ConfigError::ZeroPayloadLimit);
        }
        Ok(())
    }

    /// Returns true when `raw` exceeds the configured length cap.
    pub(crate) fn exceeds_limit(&self, raw: &str) -> bool {
        match self.max_payload_chars {
            // Byte length bounds char count from above, so skip the scan when it fits.
            Some(limit) => raw.len() > limit && raw.chars().count() > limit,
            None => false,
        }
    }
}

/// Errors that can occur when validating a [`ClassifierConfig`].
///
/// These are start-up problems; surface them before classifying live scans.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// `version` was set to zero.
    #[error("classifier version must be >= 1")]
    InvalidVersion,

    /// `max_payload_chars` was set to zero, which would reject every payload.
    #[error("max_payload_chars must be greater than zero when set")]
    ZeroPayloadLimit,
}
