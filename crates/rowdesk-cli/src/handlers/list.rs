use anyhow::Result;
use rowdesk_runtime::RecordStore;
use rowdesk_types::SortKey;

use super::{latest, start_controller};
use crate::context::CommandContext;
use crate::presentation::presenters::present_list_result;
use crate::presentation::{ConsoleRenderer, Renderer};

pub struct ListOptions {
    pub search: Option<String>,
    pub sort: SortKey,
    pub desc: bool,
    pub page: usize,
}

pub async fn handle<S: RecordStore>(
    ctx: &CommandContext,
    store: S,
    options: ListOptions,
) -> Result<()> {
    let mut controller = start_controller(ctx, store).await?;

    if let Some(term) = options.search {
        controller.search(term)?;
    }

    // Header-click semantics: a new key starts ascending, the same key flips.
    if controller.view().sort_by != options.sort {
        controller.sort(options.sort)?;
    }
    if options.desc {
        controller.sort(options.sort)?;
    }

    controller.go_to_page(options.page)?;

    let snapshot = latest(&controller)?;
    ConsoleRenderer::new(ctx.json()).render(present_list_result(snapshot))
}
