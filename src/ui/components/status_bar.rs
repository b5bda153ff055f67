//! One-line status bar with contextual key hints.

use crate::ui::core::{RenderContext, View};
use crate::ui::layout_state::LayoutState;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct StatusBar;

impl StatusBar {
    pub fn render(f: &mut Frame, rect: Rect, ctx: &RenderContext, view: &View, layout: &LayoutState, narrow: bool) {
        let palette = &ctx.palette;

        // While a drag is in flight the bar becomes the width readout;
        // this doubles as the global "resizing" marker.
        let text = if ctx.resizing {
            format!(" resizing sidebar: {}px · release to finish", layout.width())
        } else if ctx.drawer_open {
            " Esc close menu · Enter select".to_string()
        } else {
            let view_hints = match view {
                View::Dashboard => "/ subreddits · t p filters · a analyse · j/k · Enter open",
                View::History => "/ filter · S sort · j/k · Enter open",
                View::Results(_) => "j/k · Enter expand · S sort · Backspace back",
            };
            let shell_hints = if narrow { "m menu" } else { "c compact" };
            format!(" {view_hints} · {shell_hints} · s settings · ? help · q quit")
        };

        let style = if ctx.resizing {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.muted)
        };
        f.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), rect);
    }
}
