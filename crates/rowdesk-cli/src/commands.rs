use super::args::{Cli, Commands};
use super::handlers;
use crate::context::CommandContext;
use crate::logging::{LOG_FILE, LogTarget, init_logging};
use anyhow::Result;
use rowdesk_runtime::{
    Config, InMemoryRecordStore, RecordStore, SqliteRecordStore, resolve_workspace_path,
};
use tokio::runtime::Runtime;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;

    let log_target = match cli.command {
        Some(Commands::Browse) => LogTarget::File(data_dir.join(LOG_FILE)),
        _ => LogTarget::Stderr,
    };
    init_logging(cli.log_level, log_target)?;

    let config = Config::load_in(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    let ctx = CommandContext {
        data_dir,
        config,
        format: cli.format,
        ephemeral: cli.ephemeral,
    };

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx);
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    if ctx.ephemeral {
        let store = InMemoryRecordStore::new(ctx.config.store.seed_count);
        dispatch(&runtime, &ctx, store, command)
    } else {
        let store = SqliteRecordStore::with_seed(ctx.db_path(), ctx.config.store.seed_count);
        dispatch(&runtime, &ctx, store, command)
    }
}

fn dispatch<S: RecordStore>(
    runtime: &Runtime,
    ctx: &CommandContext,
    store: S,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::Init => runtime.block_on(handlers::init::handle(ctx, store)),

        Commands::List {
            search,
            sort,
            desc,
            page,
        } => runtime.block_on(handlers::list::handle(
            ctx,
            store,
            handlers::list::ListOptions {
                search,
                sort: sort.into(),
                desc,
                page,
            },
        )),

        Commands::Add { name } => runtime.block_on(handlers::record::handle_add(ctx, store, &name)),

        Commands::Edit { id, name } => {
            runtime.block_on(handlers::record::handle_edit(ctx, store, id, &name))
        }

        Commands::Delete { id } => runtime.block_on(handlers::record::handle_delete(ctx, store, id)),

        Commands::Browse => handlers::browse::handle(runtime, ctx, store),
    }
}
