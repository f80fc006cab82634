//! Everything a result dialog needs, in one serializable value.
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::action::ActionDescriptor;
use crate::content::{ContentKind, ContentVariant};
use crate::labels::LabelProvider;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub kind: ContentKind,
    pub title: String,
    pub body: String,
    pub action_label: String,
    /// `None` when no descriptor could be built; see `action_error`.
    pub action: Option<ActionDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_error: Option<String>,
}

/// Resolves labels and builds the action for `content`.
///
/// ```rust
/// use payload::{classify, present, ClassifierConfig, DefaultLabels};
///
/// let content = classify("tel:+123456789", &ClassifierConfig::default());
/// let view = present(&content, &DefaultLabels);
/// assert_eq!(view.title, "Phone number");
/// assert_eq!(view.body, "+123456789");
/// assert_eq!(view.action_label, "Call");
/// ```
pub fn present(content: &ContentVariant, labels: &dyn LabelProvider) -> Presentation {
    let (action, action_error) = match content.action() {
        Ok(action) => (Some(action), None),
        Err(err) => {
            warn!(kind = %content.kind(), error = %err, "action_unavailable");
            (None, Some(err.to_string()))
        }
    };
    Presentation {
        kind: content.kind(),
        title: content.title(labels),
        body: content.render(labels),
        action_label: content.action_label(labels),
        action,
        action_error,
    }
}
