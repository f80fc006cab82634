//! QR payload classification and field extraction.
//!
//! A barcode decoder hands us a string. We figure out what it is (web link,
//! e-mail, SMS, phone number, location, contact card, Wi-Fi credentials,
//! app-store link, or just text), pull out the fields that format carries,
//! and describe what acting on it would mean. We never perform the action.
//!
//! ## What we do here
//!
//! - **Classify** - an ordered list of predicates, first match wins, plain
//!   text when nothing matches. See [`classify`] and [`detect_kind`].
//! - **Extract** - per-format parsers that never fail; malformed input gives
//!   partial fields or an invalid marker.
//! - **Render** - human-readable text with every caption pulled from an
//!   injected [`LabelProvider`].
//! - **Describe** - an [`ActionDescriptor`] for the platform layer to execute.
//! - **Log** - structured `tracing` events for classifications and for every
//!   degraded parse.
//!
//! ## Pure function guarantee
//!
//! No I/O, no global state, no clocks that affect output. Every entry point
//! is safe to call from many threads at once.
//!
//! ## Example
//!
//! ```
//! use payload::{classify, present, ActionDescriptor, ClassifierConfig, DefaultLabels};
//!
//! let cfg = ClassifierConfig::default();
//! let content = classify("WIFI:S:Example;T:WPA;P:example123;;", &cfg);
//! let view = present(&content, &DefaultLabels);
//!
//! assert_eq!(view.title, "Wi-Fi network");
//! assert!(matches!(view.action, Some(ActionDescriptor::JoinWifi { .. })));
//! ```
mod action;
mod classify;
mod config;
mod contact;
mod content;
mod email;
mod error;
mod geo;
mod labels;
mod market;
mod phone;
mod present;
mod sms;
mod text;
mod token;
mod url;
mod wifi;

pub use crate::action::ActionDescriptor;
pub use crate::classify::{classify, detect_kind};
pub use crate::config::{ClassifierConfig, ConfigError};
pub use crate::contact::Contact;
pub use crate::content::{ContentKind, ContentVariant};
pub use crate::email::Email;
pub use crate::error::{ActionError, LabelError, UnknownKindError};
pub use crate::geo::GeoLocation;
pub use crate::labels::{DefaultLabels, LabelCatalog, LabelKey, LabelProvider, TextLabel};
pub use crate::market::MarketLink;
pub use crate::phone::PhoneNumber;
pub use crate::present::{present, Presentation};
pub use crate::sms::Sms;
pub use crate::text::PlainText;
pub use crate::token::{parse_fields, split_segments, tokenize, Token};
pub use crate::url::{is_web_url, normalize_url, WebUrl};
pub use crate::wifi::{Wifi, WifiSecurity};
