use serde::{Deserialize, Serialize};

use crate::action::ActionDescriptor;
use crate::classify::TEL_PREFIX;

/// `tel:<number>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub number: String,
    /// The original `tel:` URI, handed to the dialer untouched.
    pub uri: String,
}

impl PhoneNumber {
    pub fn parse(raw: &str) -> Self {
        Self {
            number: raw.get(TEL_PREFIX.len()..).unwrap_or_default().to_string(),
            uri: raw.to_string(),
        }
    }

    pub fn render(&self) -> String {
        self.number.clone()
    }

    pub fn action(&self) -> ActionDescriptor {
        ActionDescriptor::Dial {
            uri: self.uri.clone(),
        }
    }
}
