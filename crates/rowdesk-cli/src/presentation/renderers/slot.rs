use rowdesk_runtime::{TableRenderer, TableSnapshot};

/// Controller-facing renderer that keeps the latest snapshot.
///
/// Handlers read it back after each transition and hand it to a presenter.
#[derive(Debug, Default)]
pub struct SnapshotSlot {
    latest: Option<TableSnapshot>,
}

impl SnapshotSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&TableSnapshot> {
        self.latest.as_ref()
    }
}

impl TableRenderer for SnapshotSlot {
    fn render(&mut self, snapshot: &TableSnapshot) {
        self.latest = Some(snapshot.clone());
    }
}
