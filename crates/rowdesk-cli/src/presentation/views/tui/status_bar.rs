use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::BrowseStatusViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a BrowseStatusViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a BrowseStatusViewModel) -> Self {
        Self { model }
    }
}

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(inner);

        let left = if let Some(prompt) = &self.model.prompt {
            Line::from(vec![
                Span::styled(format!("{}: ", prompt.label), Style::default().fg(Color::Cyan)),
                Span::raw(prompt.input.as_str()),
                Span::raw("▏"),
            ])
        } else if let Some(badge) = &self.model.badge {
            Line::from(vec![
                Span::styled(
                    badge.label.as_str(),
                    Style::default().fg(status_level_to_color(badge.level)),
                ),
                Span::raw(" | "),
                Span::raw(self.model.summary.as_str()),
            ])
        } else {
            Line::from(self.model.summary.as_str())
        };
        Paragraph::new(left).render(chunks[0], buf);

        let help = if self.model.prompt.is_some() {
            Line::from(vec![key("[Enter]"), Span::raw("ok "), key("[Esc]"), Span::raw("cancel")])
        } else {
            Line::from(vec![
                key("[/]"),
                Span::raw("search "),
                key("[i/n]"),
                Span::raw("sort "),
                key("[←/→]"),
                Span::raw("page "),
                key("[[/]]"),
                Span::raw("pick page "),
                key("[a]"),
                Span::raw("dd "),
                key("[q]"),
                Span::raw("uit"),
            ])
        };
        Paragraph::new(help).render(chunks[1], buf);
    }
}
