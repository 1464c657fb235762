use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, GuidanceViewModel, InitViewModel, StatusBadge,
};

pub fn present_init_result(content: InitViewModel) -> CommandResultViewModel<InitViewModel> {
    let badge = if content.freshly_seeded {
        StatusBadge::success(format!("Seeded {} records", content.record_count))
    } else {
        StatusBadge::info("Database already initialized")
    };

    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestion(Guidance::new("Page through the table").with_command("rowdesk list"))
        .with_suggestion(Guidance::new("Browse interactively").with_command("rowdesk browse"))
}

pub fn present_guidance(content: GuidanceViewModel) -> CommandResultViewModel<GuidanceViewModel> {
    let result = CommandResultViewModel::new(content);

    if result.content.db_exists {
        result
    } else {
        result.with_suggestion(Guidance::new("Create the database").with_command("rowdesk init"))
    }
}
