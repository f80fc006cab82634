use serde::{Deserialize, Serialize};

use crate::action::ActionDescriptor;
use crate::classify::SMSTO_PREFIX;
use crate::labels::{LabelProvider, TextLabel};

/// `smsto:<number>[:<body>]`. Colons inside the body are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sms {
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Sms {
    pub fn parse(raw: &str) -> Self {
        let rest = raw.get(SMSTO_PREFIX.len()..).unwrap_or_default();
        let (number, body) = match rest.split_once(':') {
            Some((number, body)) => (number, Some(body).filter(|body| !body.is_empty())),
            None => (rest, None),
        };
        Self {
            phone_number: number.to_string(),
            body: body.map(str::to_string),
        }
    }

    pub fn render(&self, labels: &dyn LabelProvider) -> String {
        let mut out = format!(
            "{} {}",
            labels.label(TextLabel::SmsPhone.into()),
            self.phone_number
        );
        if let Some(body) = &self.body {
            out.push('\n');
            out.push_str(&labels.label(TextLabel::SmsMessage.into()));
            out.push(' ');
            out.push_str(body);
        }
        out
    }

    pub fn action(&self) -> ActionDescriptor {
        ActionDescriptor::ComposeSms {
            address: format!("{SMSTO_PREFIX}{}", self.phone_number),
            body: self.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::DefaultLabels;

    #[test]
    fn number_only() {
        let sms = Sms::parse("smsto:+123456789");
        assert_eq!(sms.phone_number, "+123456789");
        assert_eq!(sms.body, None);
        assert_eq!(sms.render(&DefaultLabels), "Phone number: +123456789");
        assert_eq!(
            sms.action(),
            ActionDescriptor::ComposeSms {
                address: "smsto:+123456789".into(),
                body: None
            }
        );
    }

    #[test]
    fn number_and_body() {
        let sms = Sms::parse("SMSTO:+18554407400:I am interested in using Scanova");
        assert_eq!(sms.phone_number, "+18554407400");
        assert_eq!(
            sms.render(&DefaultLabels),
            "Phone number: +18554407400\nMessage: I am interested in using Scanova"
        );
        assert_eq!(
            sms.action(),
            ActionDescriptor::ComposeSms {
                address: "smsto:+18554407400".into(),
                body: Some("I am interested in using Scanova".into())
            }
        );
    }

    #[test]
    fn body_keeps_colons_and_empty_body_is_absent() {
        assert_eq!(
            Sms::parse("smsto:1:meet at 10:30").body.as_deref(),
            Some("meet at 10:30")
        );
        assert_eq!(Sms::parse("smsto:1:").body, None);
        assert_eq!(Sms::parse("smsto:").phone_number, "");
    }
}
