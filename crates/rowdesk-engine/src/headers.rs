use rowdesk_types::{SortDirection, SortKey, ViewState};
use serde::Serialize;

/// Table columns, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Id,
    Name,
    Actions,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Id, Column::Name, Column::Actions];

    pub fn label(&self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Name => "Name",
            Column::Actions => "Actions",
        }
    }

    /// Sort key bound to this column, if the column is sortable.
    pub fn sort_key(&self) -> Option<SortKey> {
        match self {
            Column::Id => Some(SortKey::Id),
            Column::Name => Some(SortKey::Name),
            Column::Actions => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub column: Column,
    pub label: String,
    pub sort_key: Option<SortKey>,
    /// Direction indicator; set only on the column currently sorted by.
    pub sort: Option<SortDirection>,
}

/// Header row for `view`, with the sort indicator on the active column.
pub fn header_cells(view: &ViewState) -> Vec<HeaderCell> {
    Column::ALL
        .iter()
        .map(|column| {
            let sort_key = column.sort_key();
            HeaderCell {
                column: *column,
                label: column.label().to_string(),
                sort_key,
                sort: (sort_key == Some(view.sort_by)).then_some(view.sort_dir),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_marks_id_ascending() {
        let cells = header_cells(&ViewState::default());

        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].sort, Some(SortDirection::Asc));
        assert_eq!(cells[1].sort, None);
        assert_eq!(cells[2].sort, None);
    }

    #[test]
    fn test_name_descending() {
        let view = ViewState {
            sort_by: SortKey::Name,
            sort_dir: SortDirection::Desc,
            ..ViewState::default()
        };
        let cells = header_cells(&view);

        assert_eq!(cells[0].sort, None);
        assert_eq!(cells[1].sort, Some(SortDirection::Desc));
    }

    #[test]
    fn test_actions_column_is_never_sortable() {
        for key in [SortKey::Id, SortKey::Name] {
            let view = ViewState {
                sort_by: key,
                ..ViewState::default()
            };
            let actions = &header_cells(&view)[2];

            assert_eq!(actions.column, Column::Actions);
            assert_eq!(actions.sort_key, None);
            assert_eq!(actions.sort, None);
        }
    }
}
