use serde::Serialize;

use super::common::{Guidance, StatusBadge};

/// Envelope around every command's output.
///
/// `--format json` serializes it as is: an optional badge, the command's
/// content and any follow-up suggestions.
#[derive(Debug, Clone, Serialize)]
pub struct CommandResultViewModel<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T: Serialize> CommandResultViewModel<T> {
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }
}
