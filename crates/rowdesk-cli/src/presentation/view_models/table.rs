use serde::Serialize;

/// One page of the record table, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableViewModel {
    pub headers: Vec<HeaderViewModel>,
    pub rows: Vec<RowViewModel>,
    pub pagination: Vec<PageControlViewModel>,
    pub search_term: String,
    pub sort_by: String,
    pub sort_dir: String,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderViewModel {
    pub label: String,
    /// "id" / "name"; absent for columns that cannot be sorted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,
    /// "asc" / "desc" on the column currently sorted by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowViewModel {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControlViewModel {
    pub kind: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<usize>,
    pub active: bool,
}
