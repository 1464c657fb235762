//! Interactive record table.
//!
//! The renderer owns UI state only: the selected row, the focused pagination
//! control, the input prompt and the last status message. Table data comes back from the handler as a view
//! model after every dispatched `BrowseAction`.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};

use crate::presentation::presenters::present_browse_status;
use crate::presentation::view_models::{
    CommandResultViewModel, PromptViewModel, StatusBadge, TableViewModel,
};
use crate::presentation::views::tui::{PaginationBarView, RecordTableView, StatusBarView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Name,
}

/// User intent decoded from a key press, executed by the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    Search(String),
    Sort(SortColumn),
    GoToPage(usize),
    Add(String),
    Edit { id: i64, name: String },
    Delete(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Search,
    Add,
    Edit { id: i64 },
}

pub struct TuiRenderer {
    table: TableViewModel,
    selected: usize,
    /// Index into `table.pagination`; rests on the active page after a refresh.
    page_focus: usize,
    mode: InputMode,
    input: String,
    badge: Option<StatusBadge>,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(table: TableViewModel) -> Self {
        let page_focus = active_control(&table);
        Self {
            table,
            selected: 0,
            page_focus,
            mode: InputMode::Normal,
            input: String::new(),
            badge: None,
            should_quit: false,
        }
    }

    /// Run the event loop until the user quits.
    ///
    /// `dispatch` executes an action against the controller and returns the
    /// refreshed table.
    pub fn run<F>(mut self, dispatch: F) -> Result<()>
    where
        F: FnMut(BrowseAction) -> Result<CommandResultViewModel<TableViewModel>>,
    {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, dispatch);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<F>(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mut dispatch: F,
    ) -> Result<()>
    where
        F: FnMut(BrowseAction) -> Result<CommandResultViewModel<TableViewModel>>,
    {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(250))?
                && let Event::Key(key) = event::read()?
                && let Some(action) = self.handle_key_event(key)
            {
                match dispatch(action) {
                    Ok(update) => self.apply(update),
                    Err(e) => {
                        tracing::warn!("browse action failed: {}", e);
                        self.badge = Some(StatusBadge::warning(e.to_string()));
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Replace the table with a refreshed one, keeping the selection in range.
    fn apply(&mut self, update: CommandResultViewModel<TableViewModel>) {
        self.table = update.content;
        self.badge = update.badge;
        self.page_focus = active_control(&self.table);
        self.selected = self
            .selected
            .min(self.table.rows.len().saturating_sub(1));
    }

    fn selected_row(&self) -> Option<(i64, &str)> {
        self.table
            .rows
            .get(self.selected)
            .map(|row| (row.id, row.name.as_str()))
    }

    /// Move the pagination cursor to the neighbouring control that has a target.
    fn move_page_focus(&mut self, forward: bool) {
        let focus = self.page_focus;
        let mut targets = self
            .table
            .pagination
            .iter()
            .enumerate()
            .filter(|(_, control)| control.target.is_some())
            .map(|(i, _)| i);

        let next = if forward {
            targets.find(|&i| i > focus)
        } else {
            targets.filter(|&i| i < focus).last()
        };
        if let Some(i) = next {
            self.page_focus = i;
        }
    }

    fn focused_target(&self) -> Option<usize> {
        self.table
            .pagination
            .get(self.page_focus)
            .and_then(|control| control.target)
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Option<BrowseAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match self.mode {
            InputMode::Normal => self.handle_normal_key(key.code),
            InputMode::Search => self.handle_search_key(key.code),
            InputMode::Add | InputMode::Edit { .. } => self.handle_prompt_key(key.code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> Option<BrowseAction> {
        let current = self.table.current_page;
        let total = self.table.total_pages;

        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('/') => {
                self.mode = InputMode::Search;
                self.input = self.table.search_term.clone();
                None
            }
            KeyCode::Char('i') => Some(BrowseAction::Sort(SortColumn::Id)),
            KeyCode::Char('n') => Some(BrowseAction::Sort(SortColumn::Name)),
            KeyCode::Left | KeyCode::Char('h') if current > 1 => {
                Some(BrowseAction::GoToPage(current - 1))
            }
            KeyCode::Right | KeyCode::Char('l') if current < total => {
                Some(BrowseAction::GoToPage(current + 1))
            }
            KeyCode::Char('[') => {
                self.move_page_focus(false);
                None
            }
            KeyCode::Char(']') => {
                self.move_page_focus(true);
                None
            }
            KeyCode::Enter => self.focused_target().map(BrowseAction::GoToPage),
            KeyCode::Char('g') => Some(BrowseAction::GoToPage(1)),
            KeyCode::Char('G') => Some(BrowseAction::GoToPage(total)),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.table.rows.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char('a') => {
                self.mode = InputMode::Add;
                self.input.clear();
                None
            }
            KeyCode::Char('e') => {
                let row = self
                    .selected_row()
                    .map(|(id, name)| (id, name.to_string()));
                if let Some((id, name)) = row {
                    self.input = name;
                    self.mode = InputMode::Edit { id };
                }
                None
            }
            KeyCode::Char('d') => self.selected_row().map(|(id, _)| BrowseAction::Delete(id)),
            _ => None,
        }
    }

    // Search applies on every keystroke.
    fn handle_search_key(&mut self, code: KeyCode) -> Option<BrowseAction> {
        match code {
            KeyCode::Enter => {
                self.mode = InputMode::Normal;
                None
            }
            KeyCode::Esc => {
                self.mode = InputMode::Normal;
                self.input.clear();
                Some(BrowseAction::Search(String::new()))
            }
            KeyCode::Backspace => {
                self.input.pop();
                Some(BrowseAction::Search(self.input.clone()))
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                Some(BrowseAction::Search(self.input.clone()))
            }
            _ => None,
        }
    }

    fn handle_prompt_key(&mut self, code: KeyCode) -> Option<BrowseAction> {
        match code {
            KeyCode::Esc => {
                self.mode = InputMode::Normal;
                self.input.clear();
                None
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            KeyCode::Enter => {
                let name = std::mem::take(&mut self.input);
                let action = match self.mode {
                    InputMode::Edit { id } => BrowseAction::Edit { id, name },
                    _ => BrowseAction::Add(name),
                };
                self.mode = InputMode::Normal;
                Some(action)
            }
            _ => None,
        }
    }

    fn prompt(&self) -> Option<PromptViewModel> {
        let label = match self.mode {
            InputMode::Normal => return None,
            InputMode::Search => "Search".to_string(),
            InputMode::Add => "New record".to_string(),
            InputMode::Edit { id } => format!("Rename {}", id),
        };

        Some(PromptViewModel {
            label,
            input: self.input.clone(),
        })
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

        let selected = (!self.table.rows.is_empty()).then_some(self.selected);
        f.render_widget(RecordTableView::new(&self.table, selected), chunks[0]);
        f.render_widget(
            PaginationBarView::new(&self.table.pagination).focused(self.page_focus),
            chunks[1],
        );

        let status = present_browse_status(&self.table, self.prompt(), self.badge.clone());
        f.render_widget(StatusBarView::new(&status), chunks[2]);
    }
}

fn active_control(table: &TableViewModel) -> usize {
    table
        .pagination
        .iter()
        .position(|control| control.active)
        .unwrap_or(0)
}
