use anyhow::Result;
use rowdesk_runtime::RecordStore;
use rowdesk_types::{RecordId, normalize_name};

use super::{TableController, latest, start_controller};
use crate::context::CommandContext;
use crate::presentation::presenters::{RecordChange, present_change_result};
use crate::presentation::{ConsoleRenderer, Renderer};

pub(crate) async fn add_record<S: RecordStore>(
    controller: &mut TableController<S>,
    name: &str,
) -> Result<RecordChange> {
    Ok(match controller.add(name).await? {
        Some(id) => RecordChange::Added(id),
        None => RecordChange::BlankName,
    })
}

pub(crate) async fn edit_record<S: RecordStore>(
    controller: &mut TableController<S>,
    id: RecordId,
    name: &str,
) -> Result<RecordChange> {
    let existed = controller.records().iter().any(|r| r.id == id);
    controller.edit(id, name).await?;

    Ok(if normalize_name(name).is_none() {
        RecordChange::BlankName
    } else if existed {
        RecordChange::Renamed(id)
    } else {
        RecordChange::Missing(id)
    })
}

pub(crate) async fn delete_record<S: RecordStore>(
    controller: &mut TableController<S>,
    id: RecordId,
) -> Result<RecordChange> {
    let existed = controller.records().iter().any(|r| r.id == id);
    controller.delete(id).await?;

    Ok(if existed {
        RecordChange::Deleted(id)
    } else {
        RecordChange::Missing(id)
    })
}

fn render_change<S: RecordStore>(
    ctx: &CommandContext,
    controller: &TableController<S>,
    change: RecordChange,
) -> Result<()> {
    let snapshot = latest(controller)?;
    ConsoleRenderer::new(ctx.json()).render(present_change_result(change, snapshot))
}

pub async fn handle_add<S: RecordStore>(ctx: &CommandContext, store: S, name: &str) -> Result<()> {
    let mut controller = start_controller(ctx, store).await?;
    let change = add_record(&mut controller, name).await?;
    render_change(ctx, &controller, change)
}

pub async fn handle_edit<S: RecordStore>(
    ctx: &CommandContext,
    store: S,
    id: i64,
    name: &str,
) -> Result<()> {
    let mut controller = start_controller(ctx, store).await?;
    let change = edit_record(&mut controller, RecordId::new(id), name).await?;
    render_change(ctx, &controller, change)
}

pub async fn handle_delete<S: RecordStore>(ctx: &CommandContext, store: S, id: i64) -> Result<()> {
    let mut controller = start_controller(ctx, store).await?;
    let change = delete_record(&mut controller, RecordId::new(id)).await?;
    render_change(ctx, &controller, change)
}
