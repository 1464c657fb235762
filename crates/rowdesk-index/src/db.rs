use rowdesk_types::{DEFAULT_SEED_COUNT, Record, RecordId};
use rusqlite::Connection;
use std::path::Path;

use crate::{Result, queries, schema};

pub struct Database {
    conn: Connection,
    freshly_seeded: bool,
}

impl Database {
    /// Open (creating and seeding if needed) the store at `db_path`.
    pub fn open(db_path: &Path) -> Result<Self> {
        Self::open_with_seed(db_path, DEFAULT_SEED_COUNT)
    }

    pub fn open_with_seed(db_path: &Path, seed_count: usize) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        tracing::debug!(path = %db_path.display(), "opened record database");
        Self::from_connection(conn, seed_count)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open_in_memory_with_seed(DEFAULT_SEED_COUNT)
    }

    pub fn open_in_memory_with_seed(seed_count: usize) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn, seed_count)
    }

    fn from_connection(mut conn: Connection, seed_count: usize) -> Result<Self> {
        let freshly_seeded = schema::init_schema(&mut conn, seed_count)?;
        Ok(Self {
            conn,
            freshly_seeded,
        })
    }

    /// Whether this open created the table and wrote the seed records.
    pub fn freshly_seeded(&self) -> bool {
        self.freshly_seeded
    }

    pub fn list_records(&self) -> Result<Vec<Record>> {
        queries::record::list(&self.conn)
    }

    pub fn get_record(&self, id: RecordId) -> Result<Option<Record>> {
        queries::record::get(&self.conn, id)
    }

    pub fn insert_record(&self, name: &str) -> Result<RecordId> {
        let id = queries::record::insert(&self.conn, name)?;
        tracing::debug!(%id, "inserted record");
        Ok(id)
    }

    /// Rename a record. Fails with `RecordNotFound` when `id` is absent.
    pub fn update_record(&self, id: RecordId, name: &str) -> Result<()> {
        queries::record::update_name(&self.conn, id, name)?;
        tracing::debug!(%id, "updated record");
        Ok(())
    }

    /// Delete a record. Fails with `RecordNotFound` when `id` is absent.
    pub fn delete_record(&self, id: RecordId) -> Result<()> {
        queries::record::delete(&self.conn, id)?;
        tracing::debug!(%id, "deleted record");
        Ok(())
    }

    pub fn count_records(&self) -> Result<usize> {
        queries::record::count(&self.conn)
    }
}
