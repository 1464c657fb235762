use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use crate::presentation::formatters::sort_arrow;
use crate::presentation::view_models::TableViewModel;

pub struct RecordTableView<'a> {
    model: &'a TableViewModel,
    selected: Option<usize>,
}

impl<'a> RecordTableView<'a> {
    pub fn new(model: &'a TableViewModel, selected: Option<usize>) -> Self {
        Self { model, selected }
    }
}

impl<'a> Widget for RecordTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(self.model.headers.iter().map(|h| {
            let text = match &h.sort {
                Some(dir) => format!("{} {}", h.label, sort_arrow(dir)),
                None => h.label.clone(),
            };
            let style = if h.sort.is_some() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Cell::from(text).style(style)
        }));

        let rows = self.model.rows.iter().enumerate().map(|(i, row)| {
            let is_selected = self.selected == Some(i);
            let actions = if is_selected { "[e]dit  [d]elete" } else { "" };
            let style = if is_selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(row.id.to_string()),
                Cell::from(row.name.as_str()),
                Cell::from(actions),
            ])
            .style(style)
        });

        let empty_title = if self.model.rows.is_empty() {
            " Records (none) "
        } else {
            " Records "
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Min(20),
                Constraint::Length(18),
            ],
        )
        .header(header)
        .block(Block::default().title(empty_title).borders(Borders::ALL));

        Widget::render(table, area, buf);
    }
}
