// rowdesk: a local record table
//
// Layering, bottom-up:
// - rowdesk-types: Record, RecordId, ViewState
// - rowdesk-index: SQLite persistence and first-run seeding
// - rowdesk-engine: pure filter/sort/slice and the pagination window
// - rowdesk-runtime: Controller driving a RecordStore and a TableRenderer
// - this crate: argument parsing, handlers and presentation
//
// Handlers drive the Controller. The Controller renders into a SnapshotSlot,
// presenters turn the latest snapshot into view models and renderers paint
// them (console text, JSON or the interactive table).

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
