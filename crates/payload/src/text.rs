use serde::{Deserialize, Serialize};

use crate::action::ActionDescriptor;

/// Anything no other format claims. Always constructible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainText {
    pub text: String,
}

impl PlainText {
    pub fn parse(raw: &str) -> Self {
        Self {
            text: raw.to_string(),
        }
    }

    pub fn render(&self) -> String {
        self.text.clone()
    }

    pub fn action(&self) -> ActionDescriptor {
        ActionDescriptor::CopyToClipboard {
            text: self.text.clone(),
        }
    }
}
