//! Sidebar navigation component
//!
//! Renders the brand header, the Dashboard/History navigation, the
//! Settings entry, and the account footer. Two presentations: full
//! (icon + label) and compact (icons only, fixed narrow width). The shell
//! decides which one renders; the same component also fills the drawer
//! panel in the narrow presentation, always in its full form.

use crate::constants::APP_TITLE;
use crate::ui::core::{actions::Action, Component, DialogType, RenderContext, View};
use crate::utils::text::truncate;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEntry {
    Dashboard,
    History,
    Settings,
}

impl SidebarEntry {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::History => "History",
            Self::Settings => "Settings",
        }
    }

    pub fn action(self) -> Action {
        match self {
            Self::Dashboard => Action::NavigateTo(View::Dashboard),
            Self::History => Action::NavigateTo(View::History),
            Self::Settings => Action::ShowDialog(DialogType::Settings),
        }
    }

    fn is_active(self, view: &View) -> bool {
        matches!(
            (self, view),
            (Self::Dashboard, View::Dashboard) | (Self::History, View::History)
        )
    }
}

const ENTRIES: [SidebarEntry; 3] = [SidebarEntry::Dashboard, SidebarEntry::History, SidebarEntry::Settings];

/// First row entries are rendered on, below the brand header.
const ENTRIES_TOP: u16 = 2;

pub struct SidebarComponent {
    active: View,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        Self {
            active: View::default(),
        }
    }

    /// Keep the highlight in sync with the shell's current view.
    pub fn set_active(&mut self, view: View) {
        self.active = view;
    }

    /// Resolve a left click inside the sidebar area to a navigation
    /// action.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        let is_in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;
        if !is_in_area {
            return Action::None;
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let row = mouse.row.saturating_sub(area.y);
            if row >= ENTRIES_TOP {
                let index = (row - ENTRIES_TOP) as usize;
                if let Some(entry) = ENTRIES.get(index) {
                    return entry.action();
                }
            }
        }
        Action::None
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let icons = ctx.icons.ui.clone();
        let nav = ctx.icons.nav.clone();
        let compact = ctx.sidebar_compact;

        let mut lines: Vec<Line> = Vec::new();

        // Brand header
        let brand_style = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
        if compact {
            lines.push(Line::from(Span::styled(format!(" {}", icons.brand), brand_style)));
        } else {
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", icons.brand), brand_style),
                Span::styled(APP_TITLE, Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)),
            ]));
        }
        lines.push(Line::default());

        for entry in ENTRIES {
            let icon = match entry {
                SidebarEntry::Dashboard => nav.dashboard,
                SidebarEntry::History => nav.history,
                SidebarEntry::Settings => nav.settings,
            };
            let style = if entry.is_active(&self.active) {
                Style::default()
                    .fg(palette.accent)
                    .bg(palette.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            let text = if compact {
                format!("  {icon}")
            } else {
                format!(" {icon} {}", entry.label())
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        lines.push(Line::default());
        let toggle_hint = if compact {
            format!("  {}", icons.expand)
        } else {
            format!(" {} collapse (c)", icons.collapse)
        };
        lines.push(Line::from(Span::styled(
            toggle_hint,
            Style::default().fg(palette.muted),
        )));

        // Account footer, pinned to the bottom when there is room
        if !compact && rect.height >= (lines.len() as u16 + 4) {
            let footer_gap = rect.height as usize - lines.len() - 3;
            for _ in 0..footer_gap {
                lines.push(Line::default());
            }
            let footer_width = rect.width.saturating_sub(1) as usize;
            lines.push(Line::from(Span::styled(
                truncate(" user@example.com", footer_width),
                Style::default().fg(palette.muted),
            )));
            lines.push(Line::from(Span::styled(
                truncate(" Free plan · 2 of 3 used", footer_width),
                Style::default().fg(palette.muted),
            )));
        }

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(palette.border));
        let paragraph = Paragraph::new(lines).block(block);
        f.render_widget(paragraph, rect);
    }
}
