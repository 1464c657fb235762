use std::fmt;

use crate::presentation::view_models::{GuidanceViewModel, InitViewModel};

pub struct InitView<'a> {
    data: &'a InitViewModel,
}

impl<'a> InitView<'a> {
    pub fn new(data: &'a InitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for InitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Data directory: {}", self.data.data_dir)?;
        match &self.data.db_path {
            Some(path) => writeln!(f, "Database:       {}", path)?,
            None => writeln!(f, "Database:       (in memory)")?,
        }
        writeln!(f, "Records:        {}", self.data.record_count)?;
        if self.data.config_created {
            writeln!(f, "Wrote default config.toml")?;
        }
        Ok(())
    }
}

impl fmt::Display for InitViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", InitView::new(self))
    }
}

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "rowdesk - local record table\n")?;
        writeln!(f, "Data directory: {}\n", self.data.data_dir)?;

        if !self.data.db_exists {
            writeln!(f, "Get started:")?;
            writeln!(f, "  rowdesk init                      # Create and seed the database")?;
            return Ok(());
        }

        writeln!(f, "Quick commands:")?;
        writeln!(f, "  rowdesk list                      # First page of records")?;
        writeln!(f, "  rowdesk list --search <TERM>      # Filter by name")?;
        writeln!(f, "  rowdesk add <NAME>                # Add a record")?;
        writeln!(f, "  rowdesk browse                    # Interactive table\n")?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  rowdesk --help")
    }
}

impl fmt::Display for GuidanceViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", GuidanceView::new(self))
    }
}
