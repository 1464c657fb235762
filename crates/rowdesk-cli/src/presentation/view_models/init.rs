use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct InitViewModel {
    /// Database file, absent for `--ephemeral` runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<String>,
    pub data_dir: String,
    pub record_count: usize,
    pub freshly_seeded: bool,
    pub config_created: bool,
}

/// Shown when `rowdesk` runs without a subcommand.
#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: String,
    pub db_exists: bool,
}
