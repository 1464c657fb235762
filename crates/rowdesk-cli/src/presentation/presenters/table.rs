use rowdesk_engine::{ControlKind, HeaderCell, PageControl};
use rowdesk_runtime::TableSnapshot;
use rowdesk_types::{Record, RecordId, SortDirection};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, HeaderViewModel, PageControlViewModel, RowViewModel,
    StatusBadge, TableViewModel,
};

/// What a mutating command ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordChange {
    Added(RecordId),
    BlankName,
    Renamed(RecordId),
    Deleted(RecordId),
    Missing(RecordId),
}

pub fn present_table(snapshot: &TableSnapshot) -> TableViewModel {
    TableViewModel {
        headers: snapshot.headers.iter().map(present_header).collect(),
        rows: snapshot.page.visible_records.iter().map(present_row).collect(),
        pagination: snapshot.pagination.iter().map(present_control).collect(),
        search_term: snapshot.view.search_term.clone(),
        sort_by: snapshot.view.sort_by.to_string(),
        sort_dir: snapshot.view.sort_dir.to_string(),
        current_page: snapshot.page.current_page,
        total_pages: snapshot.page.total_pages,
        total_items: snapshot.page.total_items,
        page_size: snapshot.view.page_size,
    }
}

fn present_header(cell: &HeaderCell) -> HeaderViewModel {
    HeaderViewModel {
        label: cell.label.clone(),
        sort_key: cell.sort_key.map(|key| key.to_string()),
        sort: cell.sort.map(|dir| dir.to_string()),
    }
}

fn present_row(record: &Record) -> RowViewModel {
    RowViewModel {
        id: record.id.get(),
        name: record.name.clone(),
    }
}

fn present_control(control: &PageControl) -> PageControlViewModel {
    let kind = match control.kind {
        ControlKind::Prev => "prev",
        ControlKind::Next => "next",
        ControlKind::Page => "page",
        ControlKind::Ellipsis => "ellipsis",
    };

    PageControlViewModel {
        kind: kind.to_string(),
        label: control.label.clone(),
        target: control.target,
        active: control.active,
    }
}

pub fn present_list_result(snapshot: &TableSnapshot) -> CommandResultViewModel<TableViewModel> {
    let content = present_table(snapshot);
    let mut result = CommandResultViewModel::new(content);

    if snapshot.page.total_items == 0 {
        let label = if snapshot.view.search_term.is_empty() {
            "No records".to_string()
        } else {
            format!("No records match '{}'", snapshot.view.search_term)
        };
        return result
            .with_badge(StatusBadge::info(label))
            .with_suggestion(Guidance::new("Add one").with_command("rowdesk add <NAME>"));
    }

    if snapshot.page.current_page < snapshot.page.total_pages {
        result = result.with_suggestion(
            Guidance::new("Next page").with_command(list_command(
                snapshot,
                snapshot.page.current_page + 1,
            )),
        );
    }

    result
}

pub fn present_change_result(
    change: RecordChange,
    snapshot: &TableSnapshot,
) -> CommandResultViewModel<TableViewModel> {
    let badge = match change {
        RecordChange::Added(id) => StatusBadge::success(format!("Added record {}", id)),
        RecordChange::BlankName => StatusBadge::info("Name is blank, nothing changed"),
        RecordChange::Renamed(id) => StatusBadge::success(format!("Renamed record {}", id)),
        RecordChange::Deleted(id) => StatusBadge::success(format!("Deleted record {}", id)),
        RecordChange::Missing(id) => {
            StatusBadge::warning(format!("Record {} does not exist, nothing changed", id))
        }
    };

    CommandResultViewModel::new(present_table(snapshot)).with_badge(badge)
}

/// `rowdesk list` invocation that reproduces the snapshot's view on `page`.
fn list_command(snapshot: &TableSnapshot, page: usize) -> String {
    let view = &snapshot.view;
    let mut command = String::from("rowdesk list");

    if !view.search_term.is_empty() {
        command.push_str(&format!(" --search {}", shell_quote(&view.search_term)));
    }
    if view.sort_by != Default::default() {
        command.push_str(&format!(" --sort {}", view.sort_by));
    }
    if view.sort_dir == SortDirection::Desc {
        command.push_str(" --desc");
    }
    command.push_str(&format!(" --page {}", page));

    command
}

/// Single-quote `arg` for a POSIX shell; embedded quotes become `'\''`.
fn shell_quote(arg: &str) -> String {
    format!("'{}'", arg.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowdesk_types::{SortKey, ViewState};

    fn records(n: i64) -> Vec<Record> {
        (1..=n).map(|i| Record::new(i, format!("Record {}", i))).collect()
    }

    #[test]
    fn test_present_table_maps_rows_and_headers() {
        let snapshot = TableSnapshot::compute(&records(3), &ViewState::default());
        let vm = present_table(&snapshot);

        assert_eq!(vm.rows.len(), 3);
        assert_eq!(vm.rows[0], RowViewModel { id: 1, name: "Record 1".to_string() });
        assert_eq!(vm.headers[0].sort.as_deref(), Some("asc"));
        assert_eq!(vm.headers[2].sort_key, None);
        assert!(vm.pagination.is_empty());
        assert_eq!(vm.sort_by, "id");
    }

    #[test]
    fn test_list_suggests_next_page_with_same_view() {
        let view = ViewState {
            search_term: "rec".to_string(),
            sort_by: SortKey::Name,
            sort_dir: SortDirection::Desc,
            ..ViewState::default()
        };
        let snapshot = TableSnapshot::compute(&records(25), &view);
        let result = present_list_result(&snapshot);

        assert!(result.badge.is_none());
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("rowdesk list --search 'rec' --sort name --desc --page 2")
        );
    }

    #[test]
    fn test_next_page_suggestion_quotes_apostrophes() {
        let records: Vec<Record> = (1..=15i64)
            .map(|i| Record::new(i, format!("O'Neil {}", i)))
            .collect();
        let view = ViewState {
            search_term: "o'neil".to_string(),
            ..ViewState::default()
        };
        let snapshot = TableSnapshot::compute(&records, &view);
        let result = present_list_result(&snapshot);

        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some(r"rowdesk list --search 'o'\''neil' --page 2")
        );
    }

    #[test]
    fn test_empty_search_gets_info_badge() {
        let view = ViewState {
            search_term: "zzz".to_string(),
            ..ViewState::default()
        };
        let snapshot = TableSnapshot::compute(&records(5), &view);
        let result = present_list_result(&snapshot);

        assert_eq!(
            result.badge.map(|b| b.label),
            Some("No records match 'zzz'".to_string())
        );
    }

    #[test]
    fn test_missing_record_is_a_warning() {
        let snapshot = TableSnapshot::compute(&records(1), &ViewState::default());
        let result = present_change_result(RecordChange::Missing(RecordId::new(9)), &snapshot);

        let badge = result.badge.unwrap();
        assert_eq!(badge.level, crate::presentation::StatusLevel::Warning);
        assert_eq!(badge.label, "Record 9 does not exist, nothing changed");
    }
}
