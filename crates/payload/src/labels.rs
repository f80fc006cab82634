//! Label lookup for human-readable output.
//!
//! Rendering never hard-codes display text. Every caption, title and button
//! label is requested through a [`LabelProvider`] by [`LabelKey`], so the
//! surrounding application can localize output without touching the parsers.
//! Providers are read-only and `Send + Sync`; share one across threads freely.
//!
//! Keys have stable string names (`title.url`, `action.wifi`, `wifi_ssid`, ...)
//! which is how a [`LabelCatalog`] is configured from outside.
//!
//! ```rust
//! use payload::{ContentKind, DefaultLabels, LabelCatalog, LabelKey, LabelProvider};
//!
//! let catalog = LabelCatalog::from_names([("title.url", "Sitio web")]).unwrap();
//! assert_eq!(catalog.label(LabelKey::Title(ContentKind::Url)), "Sitio web");
//! // Anything not overridden falls back to the built-in English text.
//! assert_eq!(catalog.label(LabelKey::Action(ContentKind::Url)), "Open");
//! assert_eq!(DefaultLabels.label(LabelKey::Title(ContentKind::Url)), "Website");
//! ```
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use crate::content::ContentKind;
use crate::error::LabelError;

/// Captions and fixed strings used inside rendered bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextLabel {
    SmsPhone,
    SmsMessage,
    GeoQuery,
    GeoLatitude,
    GeoLongitude,
    GeoAltitude,
    GeoAltitudeSuffix,
    GeoNorth,
    GeoSouth,
    GeoEast,
    GeoWest,
    ContactName,
    ContactPhone,
    ContactAddress,
    ContactEmail,
    ContactCompany,
    WifiSecurity,
    WifiSsid,
    WifiPassword,
    WifiHidden,
    UnsupportedData,
}

impl TextLabel {
    pub const ALL: [TextLabel; 21] = [
        TextLabel::SmsPhone,
        TextLabel::SmsMessage,
        TextLabel::GeoQuery,
        TextLabel::GeoLatitude,
        TextLabel::GeoLongitude,
        TextLabel::GeoAltitude,
        TextLabel::GeoAltitudeSuffix,
        TextLabel::GeoNorth,
        TextLabel::GeoSouth,
        TextLabel::GeoEast,
        TextLabel::GeoWest,
        TextLabel::ContactName,
        TextLabel::ContactPhone,
        TextLabel::ContactAddress,
        TextLabel::ContactEmail,
        TextLabel::ContactCompany,
        TextLabel::WifiSecurity,
        TextLabel::WifiSsid,
        TextLabel::WifiPassword,
        TextLabel::WifiHidden,
        TextLabel::UnsupportedData,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextLabel::SmsPhone => "sms_phone",
            TextLabel::SmsMessage => "sms_message",
            TextLabel::GeoQuery => "geo_query",
            TextLabel::GeoLatitude => "geo_latitude",
            TextLabel::GeoLongitude => "geo_longitude",
            TextLabel::GeoAltitude => "geo_altitude",
            TextLabel::GeoAltitudeSuffix => "geo_altitude_suffix",
            TextLabel::GeoNorth => "geo_north",
            TextLabel::GeoSouth => "geo_south",
            TextLabel::GeoEast => "geo_east",
            TextLabel::GeoWest => "geo_west",
            TextLabel::ContactName => "contact_name",
            TextLabel::ContactPhone => "contact_phone",
            TextLabel::ContactAddress => "contact_address",
            TextLabel::ContactEmail => "contact_email",
            TextLabel::ContactCompany => "contact_company",
            TextLabel::WifiSecurity => "wifi_security",
            TextLabel::WifiSsid => "wifi_ssid",
            TextLabel::WifiPassword => "wifi_password",
            TextLabel::WifiHidden => "wifi_hidden",
            TextLabel::UnsupportedData => "unsupported_data",
        }
    }
}

/// Identifies one piece of display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    /// Dialog title for a content kind.
    Title(ContentKind),
    /// Action button caption for a content kind.
    Action(ContentKind),
    /// Caption or fixed string used inside a rendered body.
    Text(TextLabel),
}

impl LabelKey {
    /// Stable external name, e.g. `title.sms` or `geo_latitude`.
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            LabelKey::Title(kind) => Cow::Owned(format!("title.{}", kind.as_str())),
            LabelKey::Action(kind) => Cow::Owned(format!("action.{}", kind.as_str())),
            LabelKey::Text(text) => Cow::Borrowed(text.as_str()),
        }
    }

    /// Inverse of [`LabelKey::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some(kind) = name.strip_prefix("title.") {
            return kind.parse().ok().map(LabelKey::Title);
        }
        if let Some(kind) = name.strip_prefix("action.") {
            return kind.parse().ok().map(LabelKey::Action);
        }
        TextLabel::ALL
            .into_iter()
            .find(|text| text.as_str() == name)
            .map(LabelKey::Text)
    }
}

impl fmt::Display for LabelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<TextLabel> for LabelKey {
    fn from(value: TextLabel) -> Self {
        LabelKey::Text(value)
    }
}

/// Read-only source of display text.
pub trait LabelProvider: Send + Sync {
    fn label(&self, key: LabelKey) -> Cow<'_, str>;
}

/// Built-in English labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLabels;

impl DefaultLabels {
    fn english(key: LabelKey) -> &'static str {
        match key {
            LabelKey::Title(kind) => match kind {
                ContentKind::Text => "Text",
                ContentKind::Url => "Website",
                ContentKind::Email => "E-mail",
                ContentKind::Sms => "SMS",
                ContentKind::Phone => "Phone number",
                ContentKind::Geo => "Location",
                ContentKind::Contact => "Contact",
                ContentKind::Wifi => "Wi-Fi network",
                ContentKind::Market => "Google Play",
            },
            LabelKey::Action(kind) => match kind {
                ContentKind::Text => "Copy",
                ContentKind::Url => "Open",
                ContentKind::Email => "Send e-mail",
                ContentKind::Sms => "Send SMS",
                ContentKind::Phone => "Call",
                ContentKind::Geo => "Show on map",
                ContentKind::Contact => "Add contact",
                ContentKind::Wifi => "Connect",
                ContentKind::Market => "Open in store",
            },
            LabelKey::Text(text) => match text {
                TextLabel::SmsPhone => "Phone number:",
                TextLabel::SmsMessage => "Message:",
                TextLabel::GeoQuery => "Title:",
                TextLabel::GeoLatitude => "Latitude:",
                TextLabel::GeoLongitude => "Longitude:",
                TextLabel::GeoAltitude => "Altitude:",
                TextLabel::GeoAltitudeSuffix => "m",
                TextLabel::GeoNorth => "N",
                TextLabel::GeoSouth => "S",
                TextLabel::GeoEast => "E",
                TextLabel::GeoWest => "W",
                TextLabel::ContactName => "Name:",
                TextLabel::ContactPhone => "Phone:",
                TextLabel::ContactAddress => "Address:",
                TextLabel::ContactEmail => "E-mail:",
                TextLabel::ContactCompany => "Company:",
                TextLabel::WifiSecurity => "Security:",
                TextLabel::WifiSsid => "SSID:",
                TextLabel::WifiPassword => "Password:",
                TextLabel::WifiHidden => "Hidden network",
                TextLabel::UnsupportedData => "Unsupported data",
            },
        }
    }
}

impl LabelProvider for DefaultLabels {
    fn label(&self, key: LabelKey) -> Cow<'_, str> {
        Cow::Borrowed(Self::english(key))
    }
}

/// Overrides on top of [`DefaultLabels`].
#[derive(Debug, Clone, Default)]
pub struct LabelCatalog {
    overrides: HashMap<LabelKey, String>,
}

impl LabelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `(name, text)` pairs, rejecting unknown names.
    pub fn from_names<I, K, V>(entries: I) -> Result<Self, LabelError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut catalog = Self::new();
        for (name, text) in entries {
            let name = name.as_ref();
            let key =
                LabelKey::from_name(name).ok_or_else(|| LabelError::UnknownKey(name.to_string()))?;
            catalog.insert(key, text);
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, key: LabelKey, text: impl Into<String>) {
        self.overrides.insert(key, text.into());
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl LabelProvider for LabelCatalog {
    fn label(&self, key: LabelKey) -> Cow<'_, str> {
        match self.overrides.get(&key) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => DefaultLabels.label(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_name_round_trips() {
        let keys = ContentKind::ALL
            .into_iter()
            .flat_map(|kind| [LabelKey::Title(kind), LabelKey::Action(kind)])
            .chain(TextLabel::ALL.into_iter().map(LabelKey::Text));
        for key in keys {
            assert_eq!(LabelKey::from_name(&key.name()), Some(key), "key {key}");
        }
    }

    #[test]
    fn unknown_names_rejected() {
        assert_eq!(LabelKey::from_name("title.fax"), None);
        assert_eq!(LabelKey::from_name("wifi_ssid "), None);
        let err = LabelCatalog::from_names([("bogus", "x")]).unwrap_err();
        assert_eq!(err, LabelError::UnknownKey("bogus".into()));
    }

    #[test]
    fn catalog_overrides_and_falls_back() {
        let catalog =
            LabelCatalog::from_names([("wifi_ssid", "Red:"), ("action.wifi", "Conectar")])
                .expect("known keys");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.label(TextLabel::WifiSsid.into()), "Red:");
        assert_eq!(catalog.label(LabelKey::Action(ContentKind::Wifi)), "Conectar");
        assert_eq!(catalog.label(TextLabel::WifiPassword.into()), "Password:");
    }
}
