pub mod browse;
pub mod common;
pub mod init;
pub mod result;
pub mod table;

pub use browse::{BrowseStatusViewModel, PromptViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use init::{GuidanceViewModel, InitViewModel};
pub use result::CommandResultViewModel;
pub use table::{HeaderViewModel, PageControlViewModel, RowViewModel, TableViewModel};
