//! Ordered, first-match classification of raw payloads.
//!
//! The predicate order is part of the contract and lives in one table,
//! `PREDICATES`. Evaluation stops at the first predicate that matches; when
//! none does the payload is plain text, so classification is total.
//!
//! | # | Kind | Predicate |
//! |---|------|-----------|
//! | 1 | Email | prefix `mailto:` |
//! | 2 | Url | whole string matches the web URL grammar |
//! | 3 | Sms | prefix `smsto:` |
//! | 4 | Geo | prefix `geo:` |
//! | 5 | Phone | prefix `tel:` |
//! | 6 | Market | prefix `market://` |
//! | 7 | Contact | prefix `MECARD:` |
//! | 8 | Wifi | prefix `WIFI:` |
//! | - | Text | fallback |
//!
//! Prefixes compare ASCII case-insensitively.
use std::time::Instant;

use tracing::{debug, warn, Level};

use crate::config::ClassifierConfig;
use crate::contact::Contact;
use crate::content::{ContentKind, ContentVariant};
use crate::email::Email;
use crate::geo::GeoLocation;
use crate::market::MarketLink;
use crate::phone::PhoneNumber;
use crate::sms::Sms;
use crate::text::PlainText;
use crate::url::{is_web_url, WebUrl};
use crate::wifi::Wifi;

pub(crate) const MAILTO_PREFIX: &str = "mailto:";
pub(crate) const SMSTO_PREFIX: &str = "smsto:";
pub(crate) const GEO_PREFIX: &str = "geo:";
pub(crate) const TEL_PREFIX: &str = "tel:";
pub(crate) const MARKET_PREFIX: &str = "market://";
pub(crate) const MECARD_PREFIX: &str = "MECARD:";
pub(crate) const WIFI_PREFIX: &str = "WIFI:";

/// Returns the remainder of `s` after `prefix`, comparing ASCII case-insensitively.
pub(crate) fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// A classification rule: which kind it selects and how it recognizes it.
pub(crate) struct Predicate {
    pub(crate) kind: ContentKind,
    test: fn(&str, &ClassifierConfig) -> bool,
}

impl Predicate {
    pub(crate) fn matches(&self, raw: &str, cfg: &ClassifierConfig) -> bool {
        (self.test)(raw, cfg)
    }
}

fn has_prefix(s: &str, prefix: &str) -> bool {
    strip_prefix_ignore_case(s, prefix).is_some()
}

fn is_email(s: &str, _: &ClassifierConfig) -> bool {
    has_prefix(s, MAILTO_PREFIX)
}

fn is_sms(s: &str, _: &ClassifierConfig) -> bool {
    has_prefix(s, SMSTO_PREFIX)
}

fn is_geo(s: &str, _: &ClassifierConfig) -> bool {
    has_prefix(s, GEO_PREFIX)
}

fn is_phone(s: &str, _: &ClassifierConfig) -> bool {
    has_prefix(s, TEL_PREFIX)
}

fn is_market(s: &str, _: &ClassifierConfig) -> bool {
    has_prefix(s, MARKET_PREFIX)
}

fn is_contact(s: &str, _: &ClassifierConfig) -> bool {
    has_prefix(s, MECARD_PREFIX)
}

fn is_wifi(s: &str, _: &ClassifierConfig) -> bool {
    has_prefix(s, WIFI_PREFIX)
}

/// Classification rules in evaluation order.
pub(crate) const PREDICATES: [Predicate; 8] = [
    Predicate {
        kind: ContentKind::Email,
        test: is_email,
    },
    Predicate {
        kind: ContentKind::Url,
        test: is_web_url,
    },
    Predicate {
        kind: ContentKind::Sms,
        test: is_sms,
    },
    Predicate {
        kind: ContentKind::Geo,
        test: is_geo,
    },
    Predicate {
        kind: ContentKind::Phone,
        test: is_phone,
    },
    Predicate {
        kind: ContentKind::Market,
        test: is_market,
    },
    Predicate {
        kind: ContentKind::Contact,
        test: is_contact,
    },
    Predicate {
        kind: ContentKind::Wifi,
        test: is_wifi,
    },
];

/// Determines which kind of content `raw` holds without extracting fields.
pub fn detect_kind(raw: &str, cfg: &ClassifierConfig) -> ContentKind {
    if cfg.exceeds_limit(raw) {
        warn!(
            raw_len = raw.len(),
            limit = ?cfg.max_payload_chars,
            "payload_over_limit"
        );
        return ContentKind::Text;
    }
    PREDICATES
        .iter()
        .find(|predicate| predicate.matches(raw, cfg))
        .map_or(ContentKind::Text, |predicate| predicate.kind)
}

/// Classifies `raw` and extracts its format-specific fields.
///
/// Never fails: malformed sub-syntax degrades to partial fields or to an
/// invalid marker on the variant, and unrecognized payloads become
/// [`ContentVariant::PlainText`].
///
/// ```rust
/// use payload::{classify, ClassifierConfig, ContentKind, ContentVariant};
///
/// let cfg = ClassifierConfig::default();
/// assert_eq!(classify("mailto:johndoe@example.com", &cfg).kind(), ContentKind::Email);
/// match classify("market://details?id=com.example", &cfg) {
///     ContentVariant::MarketLink(link) => assert_eq!(link.target, "com.example"),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn classify(raw: &str, cfg: &ClassifierConfig) -> ContentVariant {
    let start = Instant::now();
    let span = tracing::span!(Level::INFO, "payload.classify", raw_len = raw.len());
    let _guard = span.enter();

    let kind = detect_kind(raw, cfg);
    let content = parse_as(kind, raw);

    debug!(
        kind = %kind,
        elapsed_micros = start.elapsed().as_micros(),
        "classify_success"
    );
    content
}

/// Runs the field extractor for `kind`. The caller vouches that `raw`
/// satisfies that kind's predicate.
pub(crate) fn parse_as(kind: ContentKind, raw: &str) -> ContentVariant {
    match kind {
        ContentKind::Text => ContentVariant::PlainText(PlainText::parse(raw)),
        ContentKind::Url => ContentVariant::WebUrl(WebUrl::parse(raw)),
        ContentKind::Email => ContentVariant::Email(Email::parse(raw)),
        ContentKind::Sms => ContentVariant::Sms(Sms::parse(raw)),
        ContentKind::Phone => ContentVariant::PhoneNumber(PhoneNumber::parse(raw)),
        ContentKind::Geo => ContentVariant::GeoLocation(GeoLocation::parse(raw)),
        ContentKind::Contact => ContentVariant::Contact(Contact::parse(raw)),
        ContentKind::Wifi => ContentVariant::Wifi(Wifi::parse(raw)),
        ContentKind::Market => ContentVariant::MarketLink(MarketLink::parse(raw)),
    }
}
