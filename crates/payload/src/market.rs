use serde::{Deserialize, Serialize};

use crate::action::ActionDescriptor;
use crate::classify::strip_prefix_ignore_case;

const DETAILS_PREFIX: &str = "market://details?id=";

/// `market://` app-store links.
///
/// Only `market://details?id=<package>` is decomposed; search, collection and
/// other forms keep the whole URI as their target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketLink {
    pub target: String,
    pub uri: String,
}

impl MarketLink {
    pub fn parse(raw: &str) -> Self {
        let target = match strip_prefix_ignore_case(raw, DETAILS_PREFIX) {
            // The id runs to the end of a single line.
            Some(id) if !id.contains(['\n', '\r']) => id,
            _ => raw,
        };
        Self {
            target: target.to_string(),
            uri: raw.to_string(),
        }
    }

    pub fn render(&self) -> String {
        self.target.clone()
    }

    pub fn action(&self) -> ActionDescriptor {
        ActionDescriptor::ViewUri {
            uri: self.uri.clone(),
        }
    }
}
