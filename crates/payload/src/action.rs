//! Side-effect-free descriptions of what acting on a payload means.
//!
//! An [`ActionDescriptor`] is produced deterministically from a parsed
//! variant and handed to whatever executes platform calls (browser, dialer,
//! contact editor, Wi-Fi manager, clipboard). Failures such as "no application
//! can handle this" belong to that executor.
//!
//! Descriptors serialize with an internal `type` tag:
//!
//! ```rust
//! use payload::ActionDescriptor;
//!
//! let action = ActionDescriptor::Dial { uri: "tel:+123456789".into() };
//! let json = serde_json::to_string(&action).unwrap();
//! assert_eq!(json, r#"{"type":"dial","uri":"tel:+123456789"}"#);
//! ```
use serde::{Deserialize, Serialize};

use crate::contact::Contact;
use crate::wifi::WifiSecurity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionDescriptor {
    /// Open a URI in whatever handles it (browser, maps, store).
    ViewUri { uri: String },
    /// Open the dialer pre-filled with a `tel:` URI.
    Dial { uri: String },
    /// Open an SMS composer addressed to an `smsto:` URI.
    ComposeSms {
        address: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<String>,
    },
    /// Open a mail composer.
    SendEmail {
        to: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subject: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<String>,
    },
    /// Start inserting a contact with whichever fields were present.
    InsertContact(Contact),
    /// Join a Wi-Fi network. `password` is already quoted as the security
    /// scheme requires; it is `None` for open networks.
    JoinWifi {
        ssid: String,
        security: WifiSecurity,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        password: Option<String>,
        hidden: bool,
    },
    /// Put text on the clipboard.
    CopyToClipboard { text: String },
    /// Nothing sensible can be done with this content.
    NoOp,
}

impl ActionDescriptor {
    /// Returns true for [`ActionDescriptor::NoOp`].
    pub fn is_noop(&self) -> bool {
        matches!(self, ActionDescriptor::NoOp)
    }
}
