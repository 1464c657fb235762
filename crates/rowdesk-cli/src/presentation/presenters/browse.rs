use crate::presentation::view_models::{
    BrowseStatusViewModel, PromptViewModel, StatusBadge, TableViewModel,
};

pub fn present_browse_status(
    table: &TableViewModel,
    prompt: Option<PromptViewModel>,
    badge: Option<StatusBadge>,
) -> BrowseStatusViewModel {
    let mut summary = format!(
        "Page {}/{} · {} records · sort: {} {}",
        table.current_page, table.total_pages, table.total_items, table.sort_by, table.sort_dir
    );
    if !table.search_term.is_empty() {
        summary.push_str(&format!(" · search: \"{}\"", table.search_term));
    }

    BrowseStatusViewModel {
        summary,
        prompt,
        badge,
    }
}
