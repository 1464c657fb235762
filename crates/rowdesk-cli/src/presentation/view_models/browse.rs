use serde::Serialize;

use super::common::StatusBadge;

/// Bottom bar of the interactive table.
#[derive(Debug, Clone, Serialize)]
pub struct BrowseStatusViewModel {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<PromptViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,
}

/// Line editor shown while searching, adding or renaming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptViewModel {
    pub label: String,
    pub input: String,
}
