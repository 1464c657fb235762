use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::PageControlViewModel;

pub struct PaginationBarView<'a> {
    controls: &'a [PageControlViewModel],
    focused: Option<usize>,
}

impl<'a> PaginationBarView<'a> {
    pub fn new(controls: &'a [PageControlViewModel]) -> Self {
        Self {
            controls,
            focused: None,
        }
    }

    /// Highlight the control under the page cursor.
    pub fn focused(mut self, index: usize) -> Self {
        self.focused = Some(index);
        self
    }
}

impl<'a> Widget for PaginationBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.controls.len() * 2);
        for (i, control) in self.controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let mut span = if control.active {
                Span::styled(
                    format!("[{}]", control.label),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )
            } else if control.target.is_none() {
                Span::styled(control.label.as_str(), Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(control.label.as_str())
            };
            if self.focused == Some(i) {
                span = span.patch_style(Style::default().add_modifier(Modifier::REVERSED));
            }
            spans.push(span);
        }

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
