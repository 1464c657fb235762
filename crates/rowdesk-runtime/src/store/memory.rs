use rowdesk_types::{Record, RecordId, seed_name};
use std::sync::{Arc, Mutex, MutexGuard};

use super::RecordStore;
use crate::{Error, Result};

struct MemoryInner {
    records: Vec<Record>,
    next_id: i64,
    opened: bool,
    seeded_on_open: bool,
}

/// Vec-backed store for tests and `--ephemeral` runs.
///
/// Clone-friendly via Arc; clones share the same records.
#[derive(Clone)]
pub struct InMemoryRecordStore {
    inner: Arc<Mutex<MemoryInner>>,
    seed_count: usize,
}

impl InMemoryRecordStore {
    pub fn new(seed_count: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryInner {
                records: Vec::new(),
                next_id: 1,
                opened: false,
                seeded_on_open: false,
            })),
            seed_count,
        }
    }

    /// Store pre-filled with `records`; seeding is skipped on open.
    /// Ids continue after the largest given id.
    pub fn with_records(records: Vec<Record>) -> Self {
        let next_id = records.iter().map(|r| r.id.get()).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(MemoryInner {
                records,
                next_id,
                opened: true,
                seeded_on_open: false,
            })),
            seed_count: 0,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryInner>> {
        self.inner
            .lock()
            .map_err(|_| Error::Background("store lock poisoned".to_string()))
    }
}

impl RecordStore for InMemoryRecordStore {
    async fn open(&mut self) -> Result<()> {
        let mut inner = self.lock()?;
        inner.seeded_on_open = !inner.opened;
        if !inner.opened {
            for n in 1..=self.seed_count {
                let id = RecordId::new(inner.next_id);
                inner.next_id += 1;
                inner.records.push(Record::new(id, seed_name(n)));
            }
            inner.opened = true;
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Record>> {
        Ok(self.lock()?.records.clone())
    }

    async fn add(&self, name: &str) -> Result<RecordId> {
        let mut inner = self.lock()?;
        let id = RecordId::new(inner.next_id);
        inner.next_id += 1;
        inner.records.push(Record::new(id, name));
        Ok(id)
    }

    async fn update(&self, id: RecordId, name: &str) -> Result<()> {
        let mut inner = self.lock()?;
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(Error::RecordNotFound(id))?;
        record.name = name.to_string();
        Ok(())
    }

    async fn remove(&self, id: RecordId) -> Result<()> {
        let mut inner = self.lock()?;
        let before = inner.records.len();
        inner.records.retain(|r| r.id != id);
        if inner.records.len() == before {
            return Err(Error::RecordNotFound(id));
        }
        Ok(())
    }

    fn freshly_seeded(&self) -> bool {
        self.lock().map(|inner| inner.seeded_on_open).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_seeds_once() -> Result<()> {
        let mut store = InMemoryRecordStore::new(3);
        store.open().await?;
        assert!(store.freshly_seeded());
        store.open().await?;
        assert!(!store.freshly_seeded());

        let records = store.list_all().await?;
        assert_eq!(records.len(), 3);
        assert_eq!(records[2], Record::new(3, "Record 3"));
        Ok(())
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() -> Result<()> {
        let mut store = InMemoryRecordStore::new(2);
        store.open().await?;

        store.remove(RecordId::new(2)).await?;
        let id = store.add("Fresh").await?;

        assert_eq!(id, RecordId::new(3));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_ids_are_reported() -> Result<()> {
        let store = InMemoryRecordStore::with_records(vec![Record::new(4, "Four")]);

        assert!(matches!(
            store.update(RecordId::new(1), "x").await,
            Err(Error::RecordNotFound(_))
        ));
        assert!(matches!(
            store.remove(RecordId::new(1)).await,
            Err(Error::RecordNotFound(_))
        ));
        assert_eq!(store.add("Five").await?, RecordId::new(5));
        Ok(())
    }
}
