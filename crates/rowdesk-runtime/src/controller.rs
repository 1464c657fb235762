use crate::store::RecordStore;
use crate::{Error, Result};
use rowdesk_engine::{
    HeaderCell, PageControl, PageResult, build_pagination, compute_page, header_cells,
};
use rowdesk_types::{Record, RecordId, SortKey, ViewState, normalize_name};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Loading,
    Ready,
}

/// Everything one render of the table needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSnapshot {
    /// View parameters with `current_page` already clamped.
    pub view: ViewState,
    pub page: PageResult,
    pub pagination: Vec<PageControl>,
    pub headers: Vec<HeaderCell>,
}

impl TableSnapshot {
    pub fn compute(records: &[Record], view: &ViewState) -> Self {
        let page = compute_page(records, view);
        let view = ViewState {
            current_page: page.current_page,
            ..view.clone()
        };

        Self {
            pagination: build_pagination(page.current_page, page.total_pages),
            headers: header_cells(&view),
            view,
            page,
        }
    }
}

/// Rendering collaborator driven by the controller after every transition.
pub trait TableRenderer {
    fn render(&mut self, snapshot: &TableSnapshot);
}

impl<F> TableRenderer for F
where
    F: FnMut(&TableSnapshot),
{
    fn render(&mut self, snapshot: &TableSnapshot) {
        self(snapshot)
    }
}

/// Owns the record collection and view parameters.
///
/// Every transition recomputes the page, writes the clamped page back into
/// the view and hands the snapshot to the renderer. Mutations await the store
/// before re-reading it.
pub struct Controller<S, R> {
    store: S,
    renderer: R,
    records: Vec<Record>,
    view: ViewState,
    state: ControllerState,
}

impl<S: RecordStore, R: TableRenderer> Controller<S, R> {
    pub fn new(store: S, renderer: R, page_size: usize) -> Self {
        Self::with_view(store, renderer, ViewState::new(page_size))
    }

    /// Start from a prepared view (search, sort, page). The page is clamped
    /// on the first render.
    pub fn with_view(store: S, renderer: R, view: ViewState) -> Self {
        Self {
            store,
            renderer,
            records: Vec::new(),
            view,
            state: ControllerState::Loading,
        }
    }

    /// Open the store, load every record and render.
    pub async fn start(&mut self) -> Result<()> {
        self.store.open().await?;
        self.records = self.store.list_all().await?;
        self.state = ControllerState::Ready;

        tracing::debug!(records = self.records.len(), "controller ready");
        self.refresh();
        Ok(())
    }

    pub fn search(&mut self, term: impl Into<String>) -> Result<()> {
        self.ensure_ready()?;
        self.view.search_term = term.into();
        self.refresh();
        Ok(())
    }

    pub fn sort(&mut self, key: SortKey) -> Result<()> {
        self.ensure_ready()?;
        self.view.apply_sort(key);
        self.refresh();
        Ok(())
    }

    pub fn go_to_page(&mut self, page: usize) -> Result<()> {
        self.ensure_ready()?;
        self.view.current_page = page;
        self.refresh();
        Ok(())
    }

    /// Add a record. Blank names are ignored.
    ///
    /// Returns the new id, or `None` when nothing was added.
    pub async fn add(&mut self, name: &str) -> Result<Option<RecordId>> {
        self.ensure_ready()?;

        let Some(name) = normalize_name(name) else {
            tracing::debug!("ignoring add with blank name");
            self.refresh();
            return Ok(None);
        };

        let id = self.store.add(name).await?;
        tracing::info!(%id, name, "record added");
        self.reload().await?;
        Ok(Some(id))
    }

    /// Rename a record. Blank names and unknown ids are ignored.
    pub async fn edit(&mut self, id: RecordId, name: &str) -> Result<()> {
        self.ensure_ready()?;

        let Some(name) = normalize_name(name) else {
            tracing::debug!(%id, "ignoring edit with blank name");
            self.refresh();
            return Ok(());
        };

        absorb_missing(self.store.update(id, name).await)?;
        self.reload().await
    }

    /// Delete a record. Unknown ids are ignored.
    pub async fn delete(&mut self, id: RecordId) -> Result<()> {
        self.ensure_ready()?;
        absorb_missing(self.store.remove(id).await)?;
        self.reload().await
    }

    /// Current table state, without rendering.
    pub fn snapshot(&self) -> Result<TableSnapshot> {
        self.ensure_ready()?;
        Ok(TableSnapshot::compute(&self.records, &self.view))
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.state {
            ControllerState::Ready => Ok(()),
            ControllerState::Loading => Err(Error::NotReady),
        }
    }

    async fn reload(&mut self) -> Result<()> {
        self.records = self.store.list_all().await?;
        self.refresh();
        Ok(())
    }

    fn refresh(&mut self) {
        let snapshot = TableSnapshot::compute(&self.records, &self.view);
        self.view.current_page = snapshot.view.current_page;
        self.renderer.render(&snapshot);
    }
}

fn absorb_missing(result: Result<()>) -> Result<()> {
    match result {
        Err(Error::RecordNotFound(id)) => {
            tracing::debug!(%id, "record already gone, ignoring");
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_clamps_view_page() {
        let records: Vec<Record> = (1..=25i64)
            .map(|i| Record::new(i, format!("Record {i}")))
            .collect();
        let view = ViewState {
            current_page: 9,
            ..ViewState::default()
        };

        let snapshot = TableSnapshot::compute(&records, &view);

        assert_eq!(snapshot.page.total_pages, 3);
        assert_eq!(snapshot.view.current_page, 3);
        assert_eq!(snapshot.page.visible_records.len(), 5);
        assert!(snapshot.pagination.iter().any(|c| c.active && c.label == "3"));
    }

    #[test]
    fn test_snapshot_of_empty_collection() {
        let snapshot = TableSnapshot::compute(&[], &ViewState::default());

        assert_eq!(snapshot.page.total_items, 0);
        assert_eq!(snapshot.page.total_pages, 1);
        assert!(snapshot.pagination.is_empty());
        assert_eq!(snapshot.headers.len(), 3);
    }

    #[test]
    fn test_absorb_missing_only_swallows_not_found() {
        assert!(absorb_missing(Err(Error::RecordNotFound(RecordId::new(1)))).is_ok());
        assert!(matches!(absorb_missing(Err(Error::NotReady)), Err(Error::NotReady)));
    }
}
