//! Dashboard view: search card plus recent research runs.

use crate::reports::ReportStore;
use crate::ui::components::cards::research_card_item;
use crate::ui::components::chip_input::ChipInput;
use crate::ui::core::{actions::Action, Component, DialogType, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

const TIME_RANGES: [&str; 5] = ["Last week", "Last month", "Last 3 months", "Last year", "All time"];
const POST_COUNTS: [&str; 4] = ["50 posts", "100 posts", "250 posts", "500 posts"];

pub struct DashboardComponent {
    pub chips: ChipInput,
    time_range: usize,
    post_count: usize,
    selected_card: usize,
    list_state: ListState,
    store: ReportStore,
}

impl DashboardComponent {
    pub fn new(store: ReportStore) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            chips: ChipInput::new(),
            time_range: 1,
            post_count: 1,
            selected_card: 0,
            list_state,
            store,
        }
    }

    pub fn time_range(&self) -> &'static str {
        TIME_RANGES[self.time_range]
    }

    pub fn post_count(&self) -> &'static str {
        POST_COUNTS[self.post_count]
    }

    pub fn selected_run_id(&self) -> Option<&'static str> {
        self.store.dashboard_runs().get(self.selected_card).map(|run| run.id)
    }

    fn next_card(&mut self) {
        let count = self.store.dashboard_runs().len();
        if count > 0 {
            self.selected_card = (self.selected_card + 1) % count;
            self.list_state.select(Some(self.selected_card));
        }
    }

    fn previous_card(&mut self) {
        let count = self.store.dashboard_runs().len();
        if count > 0 {
            self.selected_card = (self.selected_card + count - 1) % count;
            self.list_state.select(Some(self.selected_card));
        }
    }

    pub fn handle_scroll(&mut self, up: bool) {
        if up {
            self.previous_card();
        } else {
            self.next_card();
        }
    }
}

impl Component for DashboardComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.chips.is_focused() {
            return self.chips.handle_key_events(key);
        }

        match key.code {
            KeyCode::Char('/') | KeyCode::Char('i') => {
                self.chips.on_focus();
                Action::None
            }
            KeyCode::Char('t') => {
                self.time_range = (self.time_range + 1) % TIME_RANGES.len();
                Action::None
            }
            KeyCode::Char('p') => {
                self.post_count = (self.post_count + 1) % POST_COUNTS.len();
                Action::None
            }
            KeyCode::Char('a') => Action::ShowDialog(DialogType::Info(
                "Analysis needs a connected data pipeline, which this build ships without. Open a saved report instead.".to_string(),
            )),
            KeyCode::Down | KeyCode::Char('j') => {
                self.next_card();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous_card();
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
                Constraint::Length(3), // hero
                Constraint::Length(4), // chip input
                Constraint::Length(2), // filters + analyse
                Constraint::Length(2), // research header
                Constraint::Min(0),    // cards
            ])
            .split(rect);

        let hero = Paragraph::new(vec![
            Line::from(Span::styled(
                " Reddit Pain Point Finder",
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                " Discover what your target audience complains about",
                Style::default().fg(palette.muted),
            )),
        ]);
        f.render_widget(hero, chunks[0]);

        self.chips.render(f, chunks[1], ctx);

        let filters = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(" t ", Style::default().fg(palette.accent)),
                Span::styled(self.time_range(), Style::default().fg(palette.fg)),
                Span::styled("   p ", Style::default().fg(palette.accent)),
                Span::styled(self.post_count(), Style::default().fg(palette.fg)),
                Span::styled("   a ", Style::default().fg(palette.accent)),
                Span::styled(
                    "Analyse",
                    Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
        ]);
        f.render_widget(filters, chunks[2]);

        let header = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                " Your research",
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "   Free plan: 2 of 3 saves used · Upgrade",
                Style::default().fg(palette.muted),
            ),
        ])]);
        f.render_widget(header, chunks[3]);

        let items: Vec<ListItem> = self
            .store
            .dashboard_runs()
            .iter()
            .enumerate()
            .map(|(i, run)| research_card_item(run, chunks[4].width, ctx, i == self.selected_card))
            .collect();
        self.list_state.select(Some(self.selected_card));
        let list = List::new(items);
        f.render_stateful_widget(list, chunks[4], &mut self.list_state);
    }
}
