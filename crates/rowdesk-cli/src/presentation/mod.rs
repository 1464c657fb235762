//! # Presentation Layer
//!
//! MVVM-style separation between the table engine and what the user sees.
//!
//! ```text
//! [ Handler ] --> [ Controller ] --> [ SnapshotSlot ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ]
//! ```
//!
//! * `view_models/`: serializable data contracts. No domain types, no logic.
//!   The JSON output is exactly these structs.
//! * `presenters/`: pure functions from `TableSnapshot` (and friends) to view models.
//! * `views/`: `fmt::Display` wrappers for plain output and ratatui widgets for
//!   the interactive table. Layout only.
//! * `renderers/`: output strategies. `ConsoleRenderer` prints text or JSON,
//!   `TuiRenderer` runs the interactive loop, `SnapshotSlot` is the
//!   controller-facing `TableRenderer`.
//! * `formatters/`: small string helpers shared by views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, SnapshotSlot};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
