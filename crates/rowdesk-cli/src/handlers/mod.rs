pub mod browse;
pub mod guidance;
pub mod init;
pub mod list;
pub mod record;

use anyhow::{Context, Result};
use rowdesk_runtime::{Controller, RecordStore, TableSnapshot};

use crate::context::CommandContext;
use crate::presentation::SnapshotSlot;

pub(crate) type TableController<S> = Controller<S, SnapshotSlot>;

/// Open the store and render the first page into a fresh slot.
pub(crate) async fn start_controller<S: RecordStore>(
    ctx: &CommandContext,
    store: S,
) -> Result<TableController<S>> {
    let mut controller = Controller::new(store, SnapshotSlot::new(), ctx.page_size());
    controller.start().await?;
    Ok(controller)
}

pub(crate) fn latest<S: RecordStore>(controller: &TableController<S>) -> Result<&TableSnapshot> {
    controller
        .renderer()
        .latest()
        .context("record table has not been rendered yet")
}
