//! The closed set of payload interpretations.
//!
//! ```text
//! raw string ──classify──▶ ContentVariant ──┬─ title(labels)
//!                                           ├─ render(labels)
//!                                           ├─ action_label(labels)
//!                                           └─ action() ──▶ ActionDescriptor
//! ```
//!
//! A variant is built once per decoded scan and never mutated afterwards.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::action::ActionDescriptor;
use crate::contact::Contact;
use crate::email::Email;
use crate::error::{ActionError, UnknownKindError};
use crate::geo::GeoLocation;
use crate::labels::{LabelKey, LabelProvider};
use crate::market::MarketLink;
use crate::phone::PhoneNumber;
use crate::sms::Sms;
use crate::text::PlainText;
use crate::url::WebUrl;
use crate::wifi::Wifi;

/// Tag identifying which variant a payload classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Url,
    Email,
    Sms,
    Phone,
    Geo,
    Contact,
    Wifi,
    Market,
}

impl ContentKind {
    pub const ALL: [ContentKind; 9] = [
        ContentKind::Text,
        ContentKind::Url,
        ContentKind::Email,
        ContentKind::Sms,
        ContentKind::Phone,
        ContentKind::Geo,
        ContentKind::Contact,
        ContentKind::Wifi,
        ContentKind::Market,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Url => "url",
            ContentKind::Email => "email",
            ContentKind::Sms => "sms",
            ContentKind::Phone => "phone",
            ContentKind::Geo => "geo",
            ContentKind::Contact => "contact",
            ContentKind::Wifi => "wifi",
            ContentKind::Market => "market",
        }
    }
}

impl FromStr for ContentKind {
    type Err = UnknownKindError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| UnknownKindError(name.to_string()))
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structured interpretation of a raw payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "fields", rename_all = "snake_case")]
pub enum ContentVariant {
    PlainText(PlainText),
    WebUrl(WebUrl),
    Email(Email),
    Sms(Sms),
    PhoneNumber(PhoneNumber),
    GeoLocation(GeoLocation),
    Contact(Contact),
    Wifi(Wifi),
    MarketLink(MarketLink),
}

impl ContentVariant {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentVariant::PlainText(_) => ContentKind::Text,
            ContentVariant::WebUrl(_) => ContentKind::Url,
            ContentVariant::Email(_) => ContentKind::Email,
            ContentVariant::Sms(_) => ContentKind::Sms,
            ContentVariant::PhoneNumber(_) => ContentKind::Phone,
            ContentVariant::GeoLocation(_) => ContentKind::Geo,
            ContentVariant::Contact(_) => ContentKind::Contact,
            ContentVariant::Wifi(_) => ContentKind::Wifi,
            ContentVariant::MarketLink(_) => ContentKind::Market,
        }
    }

    /// Localized dialog title for this kind of content.
    pub fn title(&self, labels: &dyn LabelProvider) -> String {
        labels.label(LabelKey::Title(self.kind())).into_owned()
    }

    /// Localized caption for the button that performs [`ContentVariant::action`].
    pub fn action_label(&self, labels: &dyn LabelProvider) -> String {
        labels.label(LabelKey::Action(self.kind())).into_owned()
    }

    /// Human-readable body text.
    pub fn render(&self, labels: &dyn LabelProvider) -> String {
        match self {
            ContentVariant::PlainText(text) => text.render(),
            ContentVariant::WebUrl(url) => url.render(),
            ContentVariant::Email(email) => email.render(),
            ContentVariant::Sms(sms) => sms.render(labels),
            ContentVariant::PhoneNumber(phone) => phone.render(),
            ContentVariant::GeoLocation(geo) => geo.render(labels),
            ContentVariant::Contact(contact) => contact.render(labels),
            ContentVariant::Wifi(wifi) => wifi.render(labels),
            ContentVariant::MarketLink(link) => link.render(),
        }
    }

    /// Describes what acting on this content should do.
    ///
    /// Only a Wi-Fi payload with an unrecognized security type fails; an
    /// invalid geo location yields [`ActionDescriptor::NoOp`].
    pub fn action(&self) -> Result<ActionDescriptor, ActionError> {
        Ok(match self {
            ContentVariant::PlainText(text) => text.action(),
            ContentVariant::WebUrl(url) => url.action(),
            ContentVariant::Email(email) => email.action(),
            ContentVariant::Sms(sms) => sms.action(),
            ContentVariant::PhoneNumber(phone) => phone.action(),
            ContentVariant::GeoLocation(geo) => geo.action(),
            ContentVariant::Contact(contact) => contact.action(),
            ContentVariant::Wifi(wifi) => return wifi.action(),
            ContentVariant::MarketLink(link) => link.action(),
        })
    }
}
