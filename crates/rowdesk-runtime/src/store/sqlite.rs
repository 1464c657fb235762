use rowdesk_index::Database;
use rowdesk_types::{DEFAULT_SEED_COUNT, Record, RecordId};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::RecordStore;
use crate::{Error, Result};

/// SQLite-backed store. Blocking calls run on tokio's blocking pool.
pub struct SqliteRecordStore {
    path: PathBuf,
    seed_count: usize,
    db: Option<Arc<Mutex<Database>>>,
    freshly_seeded: bool,
}

impl SqliteRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_seed(path, DEFAULT_SEED_COUNT)
    }

    pub fn with_seed(path: impl Into<PathBuf>, seed_count: usize) -> Self {
        Self {
            path: path.into(),
            seed_count,
            db: None,
            freshly_seeded: false,
        }
    }

    async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Database) -> rowdesk_index::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = self
            .db
            .clone()
            .ok_or_else(|| Error::StoreUnavailable("store has not been opened".to_string()))?;

        tokio::task::spawn_blocking(move || {
            let guard = db
                .lock()
                .map_err(|_| Error::Background("database lock poisoned".to_string()))?;
            f(&guard).map_err(Error::from)
        })
        .await?
    }
}

impl RecordStore for SqliteRecordStore {
    async fn open(&mut self) -> Result<()> {
        let path = self.path.clone();
        let seed_count = self.seed_count;

        let db = tokio::task::spawn_blocking(move || Database::open_with_seed(&path, seed_count))
            .await?
            .map_err(|e| Error::StoreUnavailable(format!("{}: {}", self.path.display(), e)))?;

        self.freshly_seeded = db.freshly_seeded();
        self.db = Some(Arc::new(Mutex::new(db)));
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Record>> {
        self.with_db(|db| db.list_records()).await
    }

    async fn add(&self, name: &str) -> Result<RecordId> {
        let name = name.to_string();
        self.with_db(move |db| db.insert_record(&name)).await
    }

    async fn update(&self, id: RecordId, name: &str) -> Result<()> {
        let name = name.to_string();
        self.with_db(move |db| db.update_record(id, &name)).await
    }

    async fn remove(&self, id: RecordId) -> Result<()> {
        self.with_db(move |db| db.delete_record(id)).await
    }

    fn freshly_seeded(&self) -> bool {
        self.freshly_seeded
    }
}
