use std::fmt;

use crate::presentation::formatters::{sort_arrow, truncate};
use crate::presentation::view_models::{HeaderViewModel, PageControlViewModel, TableViewModel};

const NAME_WIDTH: usize = 60;

// --------------------------------------------------------
// Record Table View
// --------------------------------------------------------

pub struct TableView<'a> {
    data: &'a TableViewModel,
}

impl<'a> TableView<'a> {
    pub fn new(data: &'a TableViewModel) -> Self {
        Self { data }
    }
}

fn header_text(header: &HeaderViewModel) -> String {
    match &header.sort {
        Some(dir) => format!("{} {}", header.label.to_uppercase(), sort_arrow(dir)),
        None => header.label.to_uppercase(),
    }
}

impl<'a> fmt::Display for TableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // The actions column only exists in the interactive table.
        let columns: Vec<String> = self
            .data
            .headers
            .iter()
            .filter(|h| h.sort_key.is_some())
            .map(header_text)
            .collect();
        let (id_header, name_header) = match columns.as_slice() {
            [id, name, ..] => (id.as_str(), name.as_str()),
            _ => ("ID", "NAME"),
        };

        let id_width = self
            .data
            .rows
            .iter()
            .map(|row| row.id.to_string().len())
            .chain(std::iter::once(id_header.chars().count()))
            .max()
            .unwrap_or(2);

        writeln!(f, "{:<id_width$}  {}", id_header, name_header)?;
        writeln!(f, "{}", "-".repeat(id_width + 2 + NAME_WIDTH))?;

        if self.data.rows.is_empty() {
            writeln!(f, "(no records)")?;
        }
        for row in &self.data.rows {
            writeln!(f, "{:<id_width$}  {}", row.id, truncate(&row.name, NAME_WIDTH))?;
        }

        if !self.data.pagination.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", PaginationLineView::new(&self.data.pagination))?;
        }

        write!(
            f,
            "Page {} of {} · {} record{}",
            self.data.current_page,
            self.data.total_pages,
            self.data.total_items,
            if self.data.total_items == 1 { "" } else { "s" }
        )?;
        if !self.data.search_term.is_empty() {
            write!(f, " · search: \"{}\"", self.data.search_term)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for TableViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", TableView::new(self))
    }
}

// --------------------------------------------------------
// Pagination Line View
// --------------------------------------------------------

/// Controls on one line, the active page in brackets.
pub struct PaginationLineView<'a> {
    controls: &'a [PageControlViewModel],
}

impl<'a> PaginationLineView<'a> {
    pub fn new(controls: &'a [PageControlViewModel]) -> Self {
        Self { controls }
    }
}

impl<'a> fmt::Display for PaginationLineView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<String> = self
            .controls
            .iter()
            .map(|c| {
                if c.active {
                    format!("[{}]", c.label)
                } else {
                    c.label.clone()
                }
            })
            .collect();
        write!(f, "{}", parts.join("  "))
    }
}
