//! Ratatui widgets for the interactive table.
//!
//! Each view borrows its view model and only maps it onto widgets.

pub mod pagination;
pub mod status_bar;
pub mod table;

pub use pagination::PaginationBarView;
pub use status_bar::StatusBarView;
pub use table::RecordTableView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
    }
}
