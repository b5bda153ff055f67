//! Subreddit chip input
//!
//! The dashboard's search field: committed subreddit names render as
//! chips, the trailing free text is the pending entry. Enter, Tab, and
//! comma commit; Backspace on an empty entry pops the last chip; losing
//! focus commits whatever is pending. Names are validated after stripping
//! a leading `r/`.

use crate::constants::MAX_SUBREDDIT_CHIPS;
use crate::ui::core::{actions::Action, Component, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChipError {
    #[error("subreddit names are 2-21 letters, digits, or underscores")]
    InvalidName,
    #[error("r/{0} is already added")]
    Duplicate(String),
    #[error("at most {} subreddits per analysis", MAX_SUBREDDIT_CHIPS)]
    AtLimit,
}

#[derive(Debug, Default)]
pub struct ChipInput {
    chips: Vec<String>,
    value: String,
    focused: bool,
    error: Option<ChipError>,
}

impl ChipInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chips(&self) -> &[String] {
        &self.chips
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn at_limit(&self) -> bool {
        self.chips.len() >= MAX_SUBREDDIT_CHIPS
    }

    /// Validate and add one name. The raw value may carry an `r/` prefix.
    pub fn add_chip(&mut self, raw: &str) -> Result<(), ChipError> {
        let name = raw.trim();
        let name = name.strip_prefix("r/").unwrap_or(name).trim();

        let valid_len = (2..=21).contains(&name.chars().count());
        let valid_chars = name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_len || !valid_chars {
            return Err(ChipError::InvalidName);
        }
        if self.chips.iter().any(|c| c == name) {
            return Err(ChipError::Duplicate(name.to_string()));
        }
        if self.at_limit() {
            return Err(ChipError::AtLimit);
        }

        self.chips.push(name.to_string());
        Ok(())
    }

    pub fn remove_chip(&mut self, name: &str) {
        self.chips.retain(|c| c != name);
    }

    fn commit(&mut self) {
        if self.value.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.value);
        match self.add_chip(&pending) {
            Ok(()) => self.error = None,
            Err(e) => {
                // keep the text so the user can fix it
                self.value = pending;
                self.error = Some(e);
            }
        }
    }
}

impl Component for ChipInput {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }
        match key.code {
            KeyCode::Char(',') | KeyCode::Enter | KeyCode::Tab => {
                self.commit();
            }
            KeyCode::Char(c) if c.is_ascii_graphic() => {
                self.value.push(c);
                self.error = None;
            }
            KeyCode::Backspace => {
                if self.value.is_empty() {
                    self.chips.pop();
                } else {
                    self.value.pop();
                }
                self.error = None;
            }
            KeyCode::Esc => {
                self.on_blur();
            }
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let border_style = if self.focused {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.border)
        };

        let mut spans: Vec<Span> = Vec::new();
        for chip in &self.chips {
            spans.push(Span::styled(
                format!(" r/{chip} "),
                Style::default()
                    .fg(palette.accent)
                    .bg(palette.selection_bg)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        if !self.at_limit() {
            if self.chips.is_empty() && self.value.is_empty() && !self.focused {
                spans.push(Span::styled(
                    "e.g. startups, SaaS, productivity",
                    Style::default().fg(palette.muted),
                ));
            } else {
                spans.push(Span::styled(self.value.clone(), Style::default().fg(palette.fg)));
            }
            if self.focused {
                spans.push(Span::styled("▏", Style::default().fg(palette.accent)));
            }
        }

        let counter_style = if self.at_limit() {
            Style::default().fg(palette.severity_low)
        } else {
            Style::default().fg(palette.muted)
        };
        let counter = format!("({}/{})", self.chips.len(), MAX_SUBREDDIT_CHIPS);

        let second_line = match &self.error {
            Some(e) => Line::from(Span::styled(
                format!("{e} {counter}"),
                Style::default().fg(palette.severity_high),
            )),
            None => Line::from(Span::styled(counter, counter_style)),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Subreddits ");
        let paragraph = Paragraph::new(vec![Line::from(spans), second_line]).block(block);
        f.render_widget(paragraph, rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.commit();
        self.focused = false;
    }
}
