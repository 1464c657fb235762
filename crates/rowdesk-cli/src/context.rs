use crate::types::OutputFormat;
use rowdesk_runtime::Config;
use std::path::{Path, PathBuf};

/// Resolved global options shared by every handler.
pub struct CommandContext {
    pub data_dir: PathBuf,
    pub config: Config,
    pub format: OutputFormat,
    pub ephemeral: bool,
}

impl CommandContext {
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn db_path(&self) -> PathBuf {
        self.config.db_path(&self.data_dir)
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size()
    }

    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
