//! Error types produced by the payload crate.
//!
//! Classification itself never fails: every string maps to some
//! [`ContentVariant`](crate::ContentVariant). The only caller-visible failure
//! surface is building an [`ActionDescriptor`](crate::ActionDescriptor) for a
//! variant whose fields cannot describe a performable action.
//!
//! # Examples
//!
//! ```rust
//! use payload::{classify, ActionError, ClassifierConfig};
//!
//! let content = classify("WIFI:T:WPA3-EAP;S:corp;;", &ClassifierConfig::default());
//! match content.action() {
//!     Ok(action) => println!("perform {action:?}"),
//!     Err(ActionError::UnsupportedSecurity(kind)) => {
//!         println!("cannot join network secured with {kind}");
//!     }
//!     Err(e) => println!("error: {e}"),
//! }
//! ```
use thiserror::Error;

/// Errors raised while turning a parsed variant into an action descriptor.
///
/// These never corrupt the variant: the caller can still render the content
/// and offer a fallback (copying the raw text, for instance).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    /// Wi-Fi payload names a security scheme other than `WEP`, `WPA` or `nopass`.
    ///
    /// ```rust
    /// use payload::ActionError;
    ///
    /// let err = ActionError::UnsupportedSecurity("WPA3-EAP".into());
    /// assert_eq!(err.to_string(), "unsupported wifi security type: WPA3-EAP");
    /// ```
    #[error("unsupported wifi security type: {0}")]
    UnsupportedSecurity(String),
}

/// Errors raised while building a [`LabelCatalog`](crate::LabelCatalog).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LabelError {
    /// The catalog names a key that no variant or field ever asks for.
    #[error("unknown label key: {0}")]
    UnknownKey(String),
}

/// Returned when parsing a [`ContentKind`](crate::ContentKind) from its name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown content kind: {0}")]
pub struct UnknownKindError(pub String);
