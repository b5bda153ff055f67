//! Results view: the pain points of one saved report, expandable and
//! sortable. Runs without a saved report get a not-found body.

use crate::models::{PainPoint, ResearchReport};
use crate::reports::ReportStore;
use crate::ui::core::{actions::Action, Component, RenderContext, View};
use crate::utils::text::wrap_text;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Frequency,
    Severity,
    Recent,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            Self::Frequency => "Frequency",
            Self::Severity => "Severity",
            Self::Recent => "Most recent",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Frequency => Self::Severity,
            Self::Severity => Self::Recent,
            Self::Recent => Self::Frequency,
        }
    }
}

pub struct ResultsComponent {
    run_id: String,
    report: Option<&'static ResearchReport>,
    selected: usize,
    expanded: Vec<bool>,
    sort: SortKey,
    list_state: ListState,
    store: ReportStore,
}

impl ResultsComponent {
    pub fn new(store: ReportStore) -> Self {
        Self {
            run_id: String::new(),
            report: None,
            selected: 0,
            expanded: Vec::new(),
            sort: SortKey::default(),
            list_state: ListState::default(),
            store,
        }
    }

    /// Point the view at a run. Resets selection, sort, and expansion.
    pub fn load(&mut self, run_id: &str) {
        self.run_id = run_id.to_string();
        self.report = self.store.report(run_id);
        self.selected = 0;
        self.sort = SortKey::default();
        self.expanded = self
            .report
            .map(|r| vec![false; r.pain_points.len()])
            .unwrap_or_default();
        self.list_state = ListState::default();
        self.list_state.select(Some(0));
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn is_expanded(&self, pain_index: usize) -> bool {
        self.expanded.get(pain_index).copied().unwrap_or(false)
    }

    /// Indices into the report's pain point list, in display order.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let Some(report) = self.report else {
            return Vec::new();
        };
        let mut indices: Vec<usize> = (0..report.pain_points.len()).collect();
        match self.sort {
            SortKey::Frequency => {
                indices.sort_by_key(|&i| std::cmp::Reverse(report.pain_points[i].frequency));
            }
            SortKey::Severity => {
                indices.sort_by_key(|&i| report.pain_points[i].severity.rank());
            }
            // "recent" keeps the authored order
            SortKey::Recent => {}
        }
        indices
    }

    fn move_selection(&mut self, down: bool) {
        let count = self.sorted_indices().len();
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

    fn toggle_expanded(&mut self) {
        if let Some(&pain_index) = self.sorted_indices().get(self.selected) {
            if let Some(flag) = self.expanded.get_mut(pain_index) {
                *flag = !*flag;
            }
        }
    }

    pub fn handle_scroll(&mut self, up: bool) {
        self.move_selection(!up);
    }

    fn pain_card_item<'a>(
        &self,
        pain: &PainPoint,
        expanded: bool,
        width: u16,
        ctx: &RenderContext,
        selected: bool,
    ) -> ListItem<'a> {
        let palette = &ctx.palette;
        let icons = &ctx.icons.ui;
        let text_width = width.saturating_sub(6) as usize;

        let base = if selected {
            Style::default().bg(palette.selection_bg)
        } else {
            Style::default()
        };

        let mut lines: Vec<Line> = Vec::new();

        let marker = if expanded {
            icons.expanded_marker
        } else {
            icons.collapsed_marker
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", icons.dot), base.fg(pain.severity.color(palette))),
            Span::styled(pain.title, base.fg(palette.fg).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}×", pain.frequency),
                base.fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {marker}"), base.fg(palette.muted)),
        ]));

        for line in wrap_text(&format!("\u{201c}{}\u{201d}", pain.top_quote), text_width)
            .into_iter()
            .take(2)
        {
            lines.push(Line::from(Span::styled(
                format!("   {line}"),
                base.fg(palette.muted).add_modifier(Modifier::ITALIC),
            )));
        }

        let mut chips: Vec<Span> = vec![Span::styled("   ", base)];
        for (i, category) in pain.categories.iter().enumerate() {
            if i > 0 {
                chips.push(Span::styled(" ", base));
            }
            chips.push(Span::styled(
                format!("[{category}]"),
                base.fg(palette.muted),
            ));
        }
        lines.push(Line::from(chips));

        if expanded {
            lines.push(Line::from(Span::styled(
                format!("   {} severity · mentioned {} times", pain.severity.label(), pain.frequency),
                base.fg(pain.severity.color(palette)),
            )));
            lines.push(Line::default());
            for line in wrap_text(pain.ai_summary, text_width) {
                lines.push(Line::from(Span::styled(
                    format!("   {line}"),
                    base.fg(palette.fg),
                )));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "   SUPPORTING POSTS",
                base.fg(palette.muted).add_modifier(Modifier::BOLD),
            )));
            for post in pain.posts {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("   {}{} ", icons.upvote, post.upvotes),
                        base.fg(palette.muted),
                    ),
                    Span::styled(post.title, base.fg(palette.fg)),
                ]));
                for line in wrap_text(post.excerpt, text_width.saturating_sub(2)) {
                    lines.push(Line::from(Span::styled(
                        format!("     {line}"),
                        base.fg(palette.muted),
                    )));
                }
                lines.push(Line::from(Span::styled(
                    format!("     {} {}", icons.link, post.url),
                    base.fg(palette.muted),
                )));
            }
        }
        lines.push(Line::default());

        ListItem::new(lines)
    }
}

impl Component for ResultsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_expanded();
                Action::None
            }
            KeyCode::Char('S') => {
                self.sort = self.sort.next();
                self.selected = 0;
                self.list_state.select(Some(0));
                Action::None
            }
            KeyCode::Backspace | KeyCode::Char('b') => Action::NavigateTo(View::Dashboard),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;

        let Some(report) = self.report else {
            let not_found = Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled(
                    " Report not found",
                    Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(" No saved report exists for analysis {}.", self.run_id),
                    Style::default().fg(palette.muted),
                )),
                Line::from(Span::styled(
                    " Press Backspace to go back to the dashboard.",
                    Style::default().fg(palette.muted),
                )),
            ]);
            f.render_widget(not_found, rect);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // back hint + header + stat row
                Constraint::Length(2), // sort row
                Constraint::Min(0),    // pain cards
            ])
            .split(rect);

        let mut head: Vec<Span> = vec![Span::raw(" ")];
        for (i, sub) in report.subreddits.iter().enumerate() {
            if i > 0 {
                head.push(Span::raw(" "));
            }
            head.push(Span::styled(
                format!("r/{sub}"),
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            ));
        }
        head.push(Span::styled(
            format!("  {}", report.date),
            Style::default().fg(palette.muted),
        ));

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                " ‹ Backspace: Dashboard",
                Style::default().fg(palette.muted),
            )),
            Line::from(head),
            Line::from(vec![
                Span::styled(
                    format!(" {}", report.pain_points.len()),
                    Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" pain points · ", Style::default().fg(palette.muted)),
                Span::styled(
                    format!("{}", report.post_count),
                    Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" posts analyzed · {}", report.time_range),
                    Style::default().fg(palette.muted),
                ),
            ]),
            Line::default(),
        ]);
        f.render_widget(header, chunks[0]);

        let controls = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(" Sort by ", Style::default().fg(palette.muted)),
                Span::styled(" S ", Style::default().fg(palette.accent)),
                Span::styled(self.sort.label(), Style::default().fg(palette.fg)),
            ]),
            Line::default(),
        ]);
        f.render_widget(controls, chunks[1]);

        let indices = self.sorted_indices();
        let items: Vec<ListItem> = indices
            .iter()
            .enumerate()
            .map(|(display_index, &pain_index)| {
                self.pain_card_item(
                    &report.pain_points[pain_index],
                    self.is_expanded(pain_index),
                    chunks[2].width,
                    ctx,
                    display_index == self.selected,
                )
            })
            .collect();
        self.list_state.select(Some(self.selected));
        let list = List::new(items);
        f.render_stateful_widget(list, chunks[2], &mut self.list_state);
    }
}
