use anyhow::Result;

use crate::context::CommandContext;
use crate::presentation::presenters::present_guidance;
use crate::presentation::view_models::GuidanceViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &CommandContext) -> Result<()> {
    let content = GuidanceViewModel {
        data_dir: ctx.data_dir().display().to_string(),
        db_exists: ctx.db_path().exists(),
    };

    ConsoleRenderer::new(ctx.json()).render(present_guidance(content))
}
