//! Scan-loop state for a live camera feed.
//!
//! A decoder reports the same payload many times per second while a code
//! stays in view. The session shows it once, and once the user dismisses the
//! result it stays quiet about that payload until the code leaves the frame
//! (`on_not_found`) or a different payload shows up.

use std::sync::Arc;

use payload::{
    classify, present, ActionDescriptor, ActionError, ClassifierConfig, ContentVariant,
    LabelProvider, Presentation,
};
use tracing::debug;

pub struct ScanSession {
    config: ClassifierConfig,
    labels: Arc<dyn LabelProvider>,
    last_payload: Option<String>,
    current: Option<ContentVariant>,
}

impl ScanSession {
    pub fn new(config: ClassifierConfig, labels: Arc<dyn LabelProvider>) -> Self {
        Self {
            config,
            labels,
            last_payload: None,
            current: None,
        }
    }

    /// Handles a decoded payload. Returns `None` when `raw` repeats a payload
    /// whose result was dismissed and nothing else has been seen since.
    pub fn on_decoded(&mut self, raw: &str) -> Option<Presentation> {
        if self.current.is_none() && self.last_payload.as_deref() == Some(raw) {
            debug!(raw_len = raw.len(), "scan_repeat_suppressed");
            return None;
        }
        let content = classify(raw, &self.config);
        let view = present(&content, self.labels.as_ref());
        self.last_payload = Some(raw.to_string());
        self.current = Some(content);
        Some(view)
    }

    /// The decoder lost sight of any code.
    pub fn on_not_found(&mut self) {
        self.last_payload = None;
    }

    /// The user closed the result without acting on it.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&ContentVariant> {
        self.current.as_ref()
    }

    /// Action for the result on screen, e.g. when a hardware key confirms it.
    pub fn trigger(&self) -> Option<Result<ActionDescriptor, ActionError>> {
        self.current.as_ref().map(ContentVariant::action)
    }
}

impl std::fmt::Debug for ScanSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanSession")
            .field("config", &self.config)
            .field("last_payload", &self.last_payload)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
