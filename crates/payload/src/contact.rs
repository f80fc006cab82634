use serde::{Deserialize, Serialize};

use crate::action::ActionDescriptor;
use crate::classify::MECARD_PREFIX;
use crate::labels::{LabelProvider, TextLabel};
use crate::token::parse_fields;

/// MECARD keys in display order, with their captions.
const FIELDS: [(&str, TextLabel); 5] = [
    ("N", TextLabel::ContactName),
    ("TEL", TextLabel::ContactPhone),
    ("ADR", TextLabel::ContactAddress),
    ("EMAIL", TextLabel::ContactEmail),
    ("ORG", TextLabel::ContactCompany),
];

/// `MECARD:N:...;TEL:...;ADR:...;EMAIL:...;ORG:...;;`
///
/// Every field is optional; a field missing from the payload stays `None`
/// and is left out of both the rendering and the insert-contact action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl Contact {
    pub fn parse(raw: &str) -> Self {
        let rest = raw.get(MECARD_PREFIX.len()..).unwrap_or_default();
        let keys = FIELDS.map(|(key, _)| key);
        let mut fields = parse_fields(rest, &keys);
        Self {
            name: fields.remove("N"),
            phone: fields.remove("TEL"),
            address: fields.remove("ADR"),
            email: fields.remove("EMAIL"),
            company: fields.remove("ORG"),
        }
    }

    fn values(&self) -> [Option<&String>; 5] {
        [
            self.name.as_ref(),
            self.phone.as_ref(),
            self.address.as_ref(),
            self.email.as_ref(),
            self.company.as_ref(),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.values().iter().all(Option::is_none)
    }

    pub fn render(&self, labels: &dyn LabelProvider) -> String {
        FIELDS
            .iter()
            .zip(self.values())
            .filter_map(|((_, caption), value)| {
                value.map(|value| format!("{} {value}", labels.label((*caption).into())))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn action(&self) -> ActionDescriptor {
        ActionDescriptor::InsertContact(self.clone())
    }
}
