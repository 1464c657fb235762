//! Record store seam used by the controller.
//!
//! Every operation is async so a persistent backend can run blocking I/O off
//! the caller's flow. The controller awaits each mutation before re-reading.

mod memory;
mod sqlite;

pub use memory::InMemoryRecordStore;
pub use sqlite::SqliteRecordStore;

use crate::Result;
use rowdesk_types::{Record, RecordId};
use std::future::Future;

pub trait RecordStore: Send + Sync {
    /// Open the backing storage, seeding it on first-ever use.
    /// Fails with `Error::StoreUnavailable`.
    fn open(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// All records in storage order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Record>>> + Send;

    /// Insert a record and return its newly assigned id.
    fn add(&self, name: &str) -> impl Future<Output = Result<RecordId>> + Send;

    /// Rename a record. Fails with `Error::RecordNotFound` for unknown ids.
    fn update(&self, id: RecordId, name: &str) -> impl Future<Output = Result<()>> + Send;

    /// Delete a record. Fails with `Error::RecordNotFound` for unknown ids.
    fn remove(&self, id: RecordId) -> impl Future<Output = Result<()>> + Send;

    /// Whether the last `open` had to seed the store.
    fn freshly_seeded(&self) -> bool {
        false
    }
}
