//! Workspace umbrella crate for qrcontent.
//!
//! Re-exports the pure classification core from `payload` and adds the parts
//! a scanning application needs around it: YAML configuration, a scan-loop
//! session, and parallel batch classification.

pub mod config;
pub mod session;

pub use config::{ConfigLoadError, LogFormat, QrConfig};
pub use payload::{
    classify, detect_kind, is_web_url, normalize_url, parse_fields, present, split_segments,
    tokenize, ActionDescriptor, ActionError, ClassifierConfig, ConfigError, Contact, ContentKind,
    ContentVariant, DefaultLabels, Email, GeoLocation, LabelCatalog, LabelError, LabelKey,
    LabelProvider, MarketLink, PhoneNumber, PlainText, Presentation, Sms, TextLabel, Token,
    UnknownKindError, WebUrl, Wifi, WifiSecurity,
};
pub use session::ScanSession;

use rayon::prelude::*;

/// Classifies every payload in parallel. Output order matches input order.
///
/// ```rust
/// use qrcontent::{classify_batch, ClassifierConfig, ContentKind};
///
/// let raw = vec!["tel:1".to_string(), "hello".to_string()];
/// let kinds: Vec<_> = classify_batch(&raw, &ClassifierConfig::default())
///     .iter()
///     .map(|c| c.kind())
///     .collect();
/// assert_eq!(kinds, [ContentKind::Phone, ContentKind::Text]);
/// ```
pub fn classify_batch(raw: &[String], cfg: &ClassifierConfig) -> Vec<ContentVariant> {
    raw.par_iter().map(|payload| classify(payload, cfg)).collect()
}
