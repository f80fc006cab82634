//! `mailto:` payloads (RFC 2368 style).
//!
//! `mailto:john@example.com?subject=Hi&body=Hello%20there` yields the address
//! plus optional subject and body. Query values are form-decoded, so `+`
//! becomes a space. If the address part holds a malformed percent escape the
//! whole remainder is kept verbatim as the address instead.
use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::action::ActionDescriptor;
use crate::classify::MAILTO_PREFIX;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
enum MailtoError {
    #[error("malformed percent escape at byte {0}")]
    MalformedEscape(usize),
    #[error("percent-decoded address is not valid UTF-8")]
    InvalidUtf8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Email {
    pub fn parse(raw: &str) -> Self {
        let rest = raw.get(MAILTO_PREFIX.len()..).unwrap_or_default();
        match parse_mailto(rest) {
            Ok(email) => email,
            Err(err) => {
                warn!(error = %err, "mailto_fallback");
                Self {
                    address: rest.to_string(),
                    subject: None,
                    body: None,
                }
            }
        }
    }

    pub fn render(&self) -> String {
        self.address.clone()
    }

    pub fn action(&self) -> ActionDescriptor {
        ActionDescriptor::SendEmail {
            to: self.address.clone(),
            subject: self.subject.clone(),
            body: self.body.clone(),
        }
    }
}

fn parse_mailto(rest: &str) -> Result<Email, MailtoError> {
    let rest = rest.split_once('#').map_or(rest, |(before, _)| before);
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    let mut recipients = Vec::new();
    let address = percent_decode(path)?;
    if !address.is_empty() {
        recipients.push(address);
    }

    let mut subject = None;
    let mut body = None;
    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        let value = value.into_owned();
        if value.is_empty() {
            continue;
        }
        match name.to_ascii_lowercase().as_str() {
            "to" => recipients.push(value),
            "subject" => subject = Some(value),
            "body" => body = Some(value),
            _ => {}
        }
    }

    Ok(Email {
        address: recipients.join(", "),
        subject,
        body,
    })
}

/// Strict `%XX` decoding: a stray or truncated escape is an error rather
/// than being passed through literally.
fn percent_decode(s: &str) -> Result<String, MailtoError> {
    let bytes = s.as_bytes();
    let malformed = s.match_indices('%').find(|(idx, _)| {
        !bytes
            .get(idx + 1..idx + 3)
            .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit))
    });
    if let Some((idx, _)) = malformed {
        return Err(MailtoError::MalformedEscape(idx));
    }
    percent_decode_str(s)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| MailtoError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_only() {
        let email = Email::parse("mailto:johndoe@example.com");
        assert_eq!(email.address, "johndoe@example.com");
        assert_eq!(email.subject, None);
        assert_eq!(email.render(), "johndoe@example.com");
    }

    #[test]
    fn uppercase_scheme_and_subject() {
        let email = Email::parse("MAILTO:johndoe@example.com?subject=Hello+world");
        assert_eq!(email.render(), "johndoe@example.com");
        assert_eq!(email.subject.as_deref(), Some("Hello world"));
    }

    #[test]
    fn headers_are_case_insensitive_and_decoded() {
        let email =
            Email::parse("mailto:a%40b.com?Subject=Re%3A%20hi&BODY=line%0Anext&cc=x@y.com");
        assert_eq!(email.address, "a@b.com");
        assert_eq!(email.subject.as_deref(), Some("Re: hi"));
        assert_eq!(email.body.as_deref(), Some("line\nnext"));
    }

    #[test]
    fn to_header_joins_address() {
        let email = Email::parse("mailto:a@b.com?to=c@d.com");
        assert_eq!(email.address, "a@b.com, c@d.com");
        let email = Email::parse("mailto:?to=c@d.com");
        assert_eq!(email.address, "c@d.com");
    }

    #[test]
    fn fragment_is_ignored() {
        let email = Email::parse("mailto:a@b.com?subject=x#frag");
        assert_eq!(email.subject.as_deref(), Some("x"));
    }

    #[test]
    fn malformed_escape_falls_back_to_verbatim() {
        let email = Email::parse("mailto:100%zz@b.com?subject=x");
        assert_eq!(email.address, "100%zz@b.com?subject=x");
        assert_eq!(email.subject, None);
        let email = Email::parse("mailto:trailing%2");
        assert_eq!(email.address, "trailing%2");
        let email = Email::parse("mailto:%ff%fe@x.com");
        assert_eq!(email.address, "%ff%fe@x.com");
    }

    #[test]
    fn action_carries_recovered_fields() {
        let email = Email::parse("mailto:a@b.com?subject=s&body=b");
        assert_eq!(
            email.action(),
            ActionDescriptor::SendEmail {
                to: "a@b.com".into(),
                subject: Some("s".into()),
                body: Some("b".into()),
            }
        );
    }

    #[test]
    fn escapes_are_validated_before_decoding() {
        assert_eq!(percent_decode("a%40b%2Ec"), Ok("a@b.c".to_string()));
        assert_eq!(percent_decode("%+1x"), Err(MailtoError::MalformedEscape(0)));
        assert_eq!(percent_decode("ok%4"), Err(MailtoError::MalformedEscape(2)));
        assert_eq!(percent_decode("%C3%A9"), Ok("\u{e9}".to_string()));
        assert_eq!(percent_decode("%C3"), Err(MailtoError::InvalidUtf8));
    }

    #[test]
    fn empty_mailto() {
        let email = Email::parse("mailto:");
        assert_eq!(email.address, "");
    }
}
