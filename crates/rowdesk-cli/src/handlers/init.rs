use anyhow::Result;
use rowdesk_runtime::RecordStore;
use rowdesk_runtime::config::CONFIG_FILE;

use super::start_controller;
use crate::context::CommandContext;
use crate::presentation::presenters::present_init_result;
use crate::presentation::view_models::InitViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};

pub async fn handle<S: RecordStore>(ctx: &CommandContext, store: S) -> Result<()> {
    let controller = start_controller(ctx, store).await?;

    let config_path = ctx.data_dir().join(CONFIG_FILE);
    let config_created = !ctx.ephemeral && !config_path.exists();
    if config_created {
        ctx.config.save_to(&config_path)?;
        tracing::info!(path = %config_path.display(), "wrote default config");
    }

    let content = InitViewModel {
        db_path: (!ctx.ephemeral).then(|| ctx.db_path().display().to_string()),
        data_dir: ctx.data_dir().display().to_string(),
        record_count: controller.records().len(),
        freshly_seeded: controller.store().freshly_seeded(),
        config_created,
    };

    ConsoleRenderer::new(ctx.json()).render(present_init_result(content))
}
