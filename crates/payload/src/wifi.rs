//! `WIFI:T:<security>;S:<ssid>;P:<password>;H:<hidden>;;` payloads.
//!
//! Parsing is lenient: a missing `T` means an open network and unknown keys
//! are ignored. Only turning the payload into a join request can fail, when
//! the security type is something other than `WEP`, `WPA` or `nopass`.
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::action::ActionDescriptor;
use crate::classify::WIFI_PREFIX;
use crate::error::ActionError;
use crate::labels::{LabelProvider, TextLabel};
use crate::token::parse_fields;

const NO_PASSWORD: &str = "nopass";

/// WEP key lengths, in hex digits, that are used as-is rather than quoted.
const WEP_HEX_LENGTHS: [usize; 3] = [10, 26, 58];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WifiSecurity {
    Wep,
    Wpa,
    NoPass,
}

impl WifiSecurity {
    /// Recognizes `WEP`, `WPA` and `nopass`, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("WEP") {
            Some(WifiSecurity::Wep)
        } else if name.eq_ignore_ascii_case("WPA") {
            Some(WifiSecurity::Wpa)
        } else if name.eq_ignore_ascii_case(NO_PASSWORD) {
            Some(WifiSecurity::NoPass)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wifi {
    pub security_type: String,
    pub ssid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub hidden: bool,
}

impl Wifi {
    pub fn parse(raw: &str) -> Self {
        let rest = raw.get(WIFI_PREFIX.len()..).unwrap_or_default();
        let mut fields = parse_fields(rest, &["T", "S", "P", "H"]);
        let security_type = fields
            .remove("T")
            .filter(|kind| !kind.is_empty())
            .unwrap_or_else(|| NO_PASSWORD.to_string());
        Self {
            security_type,
            ssid: fields.remove("S").unwrap_or_default(),
            password: fields.remove("P"),
            hidden: fields
                .remove("H")
                .is_some_and(|hidden| hidden.eq_ignore_ascii_case("true")),
        }
    }

    pub fn security(&self) -> Result<WifiSecurity, ActionError> {
        WifiSecurity::from_name(&self.security_type)
            .ok_or_else(|| ActionError::UnsupportedSecurity(self.security_type.clone()))
    }

    pub fn render(&self, labels: &dyn LabelProvider) -> String {
        let label = |text: TextLabel| labels.label(text.into());
        let mut lines = vec![format!(
            "{} {}",
            label(TextLabel::WifiSecurity),
            self.security_type
        )];
        if !self.ssid.is_empty() {
            lines.push(format!("{} {}", label(TextLabel::WifiSsid), self.ssid));
        }
        if let Some(password) = &self.password {
            lines.push(format!("{} {password}", label(TextLabel::WifiPassword)));
        }
        if self.hidden {
            lines.push(label(TextLabel::WifiHidden).into_owned());
        }
        lines.join("\n")
    }

    pub fn action(&self) -> Result<ActionDescriptor, ActionError> {
        let security = self.security().inspect_err(|err| {
            warn!(error = %err, ssid = %self.ssid, "wifi_unsupported_security");
        })?;
        let password = match security {
            WifiSecurity::NoPass => None,
            WifiSecurity::Wep => self.password.as_deref().map(wep_key),
            WifiSecurity::Wpa => self.password.as_deref().map(quote),
        };
        Ok(ActionDescriptor::JoinWifi {
            ssid: self.ssid.clone(),
            security,
            password,
            hidden: self.hidden,
        })
    }
}

fn quote(s: &str) -> String {
    format!("\"{s}\"")
}

/// Hex WEP keys of a standard length are passed through; anything else is
/// an ASCII passphrase and gets quoted.
fn wep_key(password: &str) -> String {
    let is_hex_key = WEP_HEX_LENGTHS.contains(&password.len())
        && password.bytes().all(|b| b.is_ascii_hexdigit());
    if is_hex_key {
        password.to_string()
    } else {
        quote(password)
    }
}
