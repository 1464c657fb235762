pub mod config;
pub mod controller;
pub mod error;
pub mod store;

pub use config::{Config, StoreConfig, TableConfig, resolve_workspace_path};
pub use controller::{Controller, ControllerState, TableRenderer, TableSnapshot};
pub use error::{Error, Result};
pub use store::{InMemoryRecordStore, RecordStore, SqliteRecordStore};
