pub mod init;
pub mod table;
pub mod tui;

pub use init::{GuidanceView, InitView};
pub use table::{PaginationLineView, TableView};
