//! Research run card rendering, shared by the dashboard and history grids.

use crate::models::ResearchRun;
use crate::ui::core::RenderContext;
use crate::utils::text::wrap_text;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// Build the multi-line list item for one research run.
pub fn research_card_item<'a>(run: &ResearchRun, width: u16, ctx: &RenderContext, selected: bool) -> ListItem<'a> {
    let palette = &ctx.palette;
    let text_width = width.saturating_sub(4) as usize;

    let base = if selected {
        Style::default().bg(palette.selection_bg)
    } else {
        Style::default()
    };

    let mut lines: Vec<Line> = Vec::new();

    // Subreddit chips + date
    let mut head: Vec<Span> = vec![Span::styled(" ", base)];
    for (i, sub) in run.subreddits.iter().enumerate() {
        if i > 0 {
            head.push(Span::styled(" ", base));
        }
        head.push(Span::styled(
            format!("r/{sub}"),
            base.fg(palette.fg).add_modifier(Modifier::BOLD),
        ));
    }
    head.push(Span::styled(
        format!("  {}", run.date),
        base.fg(palette.muted),
    ));
    lines.push(Line::from(head));

    lines.push(Line::from(vec![
        Span::styled(
            format!(" {}", run.pain_count),
            base.fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" pain points", base.fg(palette.muted)),
    ]));

    // Top insight, clamped to two lines
    for line in wrap_text(&format!("\u{201c}{}\u{201d}", run.top_pain), text_width)
        .into_iter()
        .take(2)
    {
        lines.push(Line::from(Span::styled(
            format!(" {line}"),
            base.fg(palette.muted).add_modifier(Modifier::ITALIC),
        )));
    }

    if selected {
        lines.push(Line::from(Span::styled(
            format!(" View results {}", ctx.icons.ui.link),
            base.fg(palette.accent),
        )));
    }
    lines.push(Line::default());

    ListItem::new(lines)
}
