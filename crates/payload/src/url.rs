//! Web URLs, with or without a scheme.
//!
//! The grammar is anchored at both ends and compiled by the `regex` crate,
//! whose finite-automaton engine matches in time linear in the input. There is
//! no backtracking to blow up on long adversarial payloads.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::action::ActionDescriptor;
use crate::classify::strip_prefix_ignore_case;
use crate::config::ClassifierConfig;

static WEB_URL: Lazy<Regex> = Lazy::new(|| {
    let scheme = r"(?:(?:https?|ftp|rtsp)://(?:[^\s/?#@]+@)?)?";
    let domain = r"(?:[\p{L}\p{N}](?:[\p{L}\p{N}\-]*[\p{L}\p{N}])?\.)+\p{L}{2,}";
    let ipv4 = r"(?:[0-9]{1,3}\.){3}[0-9]{1,3}";
    let port = r"(?::[0-9]{1,5})?";
    let rest = r"(?:[/?#]\S*)?";
    Regex::new(&format!("(?i)^{scheme}(?:{domain}|{ipv4}){port}{rest}$"))
        .expect("web url grammar compiles")
});

const FTP_PREFIX: &str = "ftp://";

/// Schemes that already make a URL absolute; anything else gets `http://`.
const ABSOLUTE_SCHEMES: [&str; 4] = ["http:", "https:", "ftp:", "rtsp:"];

/// Whether the whole of `raw` is a web URL under `cfg`.
pub fn is_web_url(raw: &str, cfg: &ClassifierConfig) -> bool {
    if !WEB_URL.is_match(raw) {
        return false;
    }
    cfg.accept_ftp_urls || strip_prefix_ignore_case(raw, FTP_PREFIX).is_none()
}

/// Prefixes `http://` unless `s` already carries an absolute scheme.
///
/// Idempotent: normalizing twice changes nothing.
///
/// ```rust
/// use payload::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "http://example.com");
/// assert_eq!(normalize_url("https://example.com"), "https://example.com");
/// assert_eq!(normalize_url(&normalize_url("example.com")), "http://example.com");
/// ```
pub fn normalize_url(s: &str) -> String {
    let absolute = ABSOLUTE_SCHEMES
        .iter()
        .any(|scheme| strip_prefix_ignore_case(s, scheme).is_some());
    if absolute {
        s.to_string()
    } else {
        format!("http://{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebUrl {
    pub normalized_url: String,
}

impl WebUrl {
    pub fn parse(raw: &str) -> Self {
        Self {
            normalized_url: normalize_url(raw),
        }
    }

    pub fn render(&self) -> String {
        self.normalized_url.clone()
    }

    pub fn action(&self) -> ActionDescriptor {
        ActionDescriptor::ViewUri {
            uri: self.normalized_url.clone(),
        }
    }
}
