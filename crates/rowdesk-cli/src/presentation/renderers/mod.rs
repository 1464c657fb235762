pub mod console;
pub mod slot;
pub mod traits;
pub mod tui;

pub use console::ConsoleRenderer;
pub use slot::SnapshotSlot;
pub use traits::Renderer;
pub use tui::{BrowseAction, SortColumn, TuiRenderer};
