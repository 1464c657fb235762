use anyhow::Result;
use rowdesk_runtime::RecordStore;
use rowdesk_types::{RecordId, SortKey};
use tokio::runtime::Runtime;

use super::record::{add_record, delete_record, edit_record};
use super::{TableController, latest, start_controller};
use crate::context::CommandContext;
use crate::presentation::presenters::{RecordChange, present_change_result, present_table};
use crate::presentation::renderers::{BrowseAction, SortColumn, TuiRenderer};
use crate::presentation::view_models::CommandResultViewModel;

pub fn handle<S: RecordStore>(runtime: &Runtime, ctx: &CommandContext, store: S) -> Result<()> {
    let mut controller = runtime.block_on(start_controller(ctx, store))?;
    let initial = present_table(latest(&controller)?);
    tracing::info!(records = controller.records().len(), "browse session started");

    TuiRenderer::new(initial).run(|action| {
        tracing::debug!(?action, "browse action");
        let change = runtime.block_on(apply_action(&mut controller, action))?;
        let snapshot = latest(&controller)?;

        Ok(match change {
            Some(change) => present_change_result(change, snapshot),
            None => CommandResultViewModel::new(present_table(snapshot)),
        })
    })
}

async fn apply_action<S: RecordStore>(
    controller: &mut TableController<S>,
    action: BrowseAction,
) -> Result<Option<RecordChange>> {
    let change = match action {
        BrowseAction::Search(term) => {
            controller.search(term)?;
            None
        }
        BrowseAction::Sort(column) => {
            controller.sort(sort_key(column))?;
            None
        }
        BrowseAction::GoToPage(page) => {
            controller.go_to_page(page)?;
            None
        }
        BrowseAction::Add(name) => Some(add_record(controller, &name).await?),
        BrowseAction::Edit { id, name } => {
            Some(edit_record(controller, RecordId::new(id), &name).await?)
        }
        BrowseAction::Delete(id) => Some(delete_record(controller, RecordId::new(id)).await?),
    };

    Ok(change)
}

fn sort_key(column: SortColumn) -> SortKey {
    match column {
        SortColumn::Id => SortKey::Id,
        SortColumn::Name => SortKey::Name,
    }
}
