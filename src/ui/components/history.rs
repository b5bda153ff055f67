//! History view: every past analysis, filterable and sortable.

use crate::models::ResearchRun;
use crate::reports::ReportStore;
use crate::ui::components::cards::research_card_item;
use crate::ui::core::{actions::Action, Component, RenderContext};
use crate::utils::datetime::parse_run_date;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistorySort {
    #[default]
    Newest,
    Oldest,
    MostPains,
}

impl HistorySort {
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::MostPains => "Most pains",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::MostPains,
            Self::MostPains => Self::Newest,
        }
    }
}

pub struct HistoryComponent {
    selected: usize,
    sort: HistorySort,
    filter: String,
    filter_focused: bool,
    list_state: ListState,
    store: ReportStore,
}

impl HistoryComponent {
    pub fn new(store: ReportStore) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            sort: HistorySort::default(),
            filter: String::new(),
            filter_focused: false,
            list_state,
            store,
        }
    }

    pub fn sort(&self) -> HistorySort {
        self.sort
    }

    pub fn is_filter_focused(&self) -> bool {
        self.filter_focused
    }

    /// Runs matching the current filter, in the current sort order.
    pub fn visible_runs(&self) -> Vec<&'static ResearchRun> {
        let needle = self.filter.to_ascii_lowercase();
        let mut runs: Vec<&ResearchRun> = self
            .store
            .history()
            .iter()
            .filter(|run| {
                needle.is_empty()
                    || run.top_pain.to_ascii_lowercase().contains(&needle)
                    || run.subreddits.iter().any(|s| s.to_ascii_lowercase().contains(&needle))
            })
            .collect();

        match self.sort {
            HistorySort::Newest => {
                runs.sort_by_key(|run| std::cmp::Reverse(parse_run_date(run.date)));
            }
            HistorySort::Oldest => {
                runs.sort_by_key(|run| parse_run_date(run.date));
            }
            HistorySort::MostPains => {
                runs.sort_by_key(|run| std::cmp::Reverse(run.pain_count));
            }
        }
        runs
    }

    pub fn selected_run_id(&self) -> Option<&'static str> {
        self.visible_runs().get(self.selected).map(|run| run.id)
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_runs().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
        self.list_state.select(Some(self.selected));
    }

    fn move_selection(&mut self, down: bool) {
        let count = self.visible_runs().len();
        if count == 0 {
            return;
        }
        self.selected = if down {
            (self.selected + 1) % count
        } else {
            (self.selected + count - 1) % count
        };
        self.list_state.select(Some(self.selected));
    }

    pub fn handle_scroll(&mut self, up: bool) {
        self.move_selection(!up);
    }
}

impl Component for HistoryComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.filter_focused {
            match key.code {
                KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => {
                    self.filter.push(c);
                    self.clamp_selection();
                }
                KeyCode::Backspace => {
                    self.filter.pop();
                    self.clamp_selection();
                }
                KeyCode::Esc | KeyCode::Enter => self.filter_focused = false,
                _ => {}
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Char('/') => {
                self.filter_focused = true;
                Action::None
            }
            KeyCode::Char('S') => {
                self.sort = self.sort.next();
                self.clamp_selection();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Enter => match self.selected_run_id() {
                Some(id) => Action::OpenReport(id.to_string()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(2), // filter/sort row
                Constraint::Min(0),    // cards
            ])
            .split(rect);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                " Search History",
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                " All your past analyses",
                Style::default().fg(palette.muted),
            )),
        ]);
        f.render_widget(header, chunks[0]);

        let filter_style = if self.filter_focused {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.fg)
        };
        let filter_text = if self.filter.is_empty() && !self.filter_focused {
            Span::styled("Search analyses...", Style::default().fg(palette.muted))
        } else {
            Span::styled(
                format!("{}{}", self.filter, if self.filter_focused { "▏" } else { "" }),
                filter_style,
            )
        };
        let controls = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(" S ", Style::default().fg(palette.accent)),
                Span::styled(self.sort.label(), Style::default().fg(palette.fg)),
                Span::styled("   / ", Style::default().fg(palette.accent)),
                filter_text,
            ]),
            Line::default(),
        ]);
        f.render_widget(controls, chunks[1]);

        let runs = self.visible_runs();
        let items: Vec<ListItem> = runs
            .iter()
            .enumerate()
            .map(|(i, run)| research_card_item(run, chunks[2].width, ctx, i == self.selected))
            .collect();
        self.list_state.select(Some(self.selected));
        let list = List::new(items);
        f.render_stateful_widget(list, chunks[2], &mut self.list_state);
    }
}
