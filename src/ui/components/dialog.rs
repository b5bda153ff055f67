//! Modal dialogs rendered over the shell: settings, help, logs, and
//! info/error messages. One dialog at a time; Escape always closes.

use crate::logger::Logger;
use crate::theme::ThemePreference;
use crate::ui::core::{actions::Action, Component, DialogType, RenderContext};
use crate::ui::layout::LayoutManager;
use crate::utils::text::wrap_text;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const APPEARANCE_OPTIONS: [ThemePreference; 3] =
    [ThemePreference::Light, ThemePreference::Dark, ThemePreference::System];

pub struct DialogComponent {
    current: Option<DialogType>,
    appearance_cursor: usize,
    preference: Option<ThemePreference>,
    logs_scroll: usize,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            current: None,
            appearance_cursor: 2,
            preference: None,
            logs_scroll: 0,
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&DialogType> {
        self.current.as_ref()
    }

    /// The shell pushes the resolver's preference down so the settings
    /// radio reflects it.
    pub fn update_data(&mut self, preference: Option<ThemePreference>) {
        self.preference = preference;
    }

    pub fn show(&mut self, dialog: DialogType) {
        if dialog == DialogType::Settings {
            self.appearance_cursor = APPEARANCE_OPTIONS
                .iter()
                .position(|&p| Some(p) == self.preference)
                .unwrap_or(2);
        }
        if dialog == DialogType::Logs {
            self.logs_scroll = 0;
        }
        self.current = Some(dialog);
    }

    pub fn hide(&mut self) {
        self.current = None;
    }

    fn render_settings(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let rect = LayoutManager::centered_rect_lines(60, 12, area);
        f.render_widget(Clear, rect);

        let mut appearance: Vec<Span> = vec![Span::raw(" ")];
        for (i, option) in APPEARANCE_OPTIONS.iter().enumerate() {
            let selected = Some(*option) == self.preference;
            let under_cursor = i == self.appearance_cursor;
            let mut style = if selected {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            if under_cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            let mark = if selected { "●" } else { "○" };
            appearance.push(Span::styled(format!(" {mark} {} ", option.as_str()), style));
        }

        let lines = vec![
            Line::from(Span::styled(
                " APPEARANCE",
                Style::default().fg(palette.muted).add_modifier(Modifier::BOLD),
            )),
            Line::from(appearance),
            Line::default(),
            Line::from(Span::styled(
                " ACCOUNT",
                Style::default().fg(palette.muted).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(" user@example.com", Style::default().fg(palette.fg))),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    " PLAN",
                    Style::default().fg(palette.muted).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Free · 2 of 3 searches used", Style::default().fg(palette.muted)),
            ]),
            Line::from(vec![
                Span::styled(" ━━━━━━━━━━━━", Style::default().fg(palette.accent)),
                Span::styled("━━━━━━", Style::default().fg(palette.border)),
            ]),
            Line::default(),
            Line::from(Span::styled(
                " ←/→ choose · Enter apply · Esc close",
                Style::default().fg(palette.muted),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .title(" Settings ")
            .title_style(Style::default().fg(palette.fg));
        f.render_widget(Paragraph::new(lines).block(block), rect);
    }

    fn render_help(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let rect = LayoutManager::centered_rect(70, 70, area);
        f.render_widget(Clear, rect);

        let key_style = Style::default().fg(palette.accent);
        let text_style = Style::default().fg(palette.fg);
        let entries: [(&str, &str); 13] = [
            ("1 / 2", "go to Dashboard / History"),
            ("j / k", "move selection"),
            ("Enter", "open report / expand pain point"),
            ("S", "cycle sort order"),
            ("/", "focus search or filter input"),
            ("t / p", "cycle time range / post count"),
            ("a", "analyse (needs a data pipeline)"),
            ("c", "collapse or expand the sidebar"),
            ("m", "open the menu drawer (narrow terminals)"),
            ("s", "settings"),
            ("G", "logs"),
            ("Esc", "close dialog, drawer, or input"),
            ("q", "quit"),
        ];
        let mut lines = vec![Line::default()];
        for (key, description) in entries {
            lines.push(Line::from(vec![
                Span::styled(format!(" {key:>7}  "), key_style),
                Span::styled(description, text_style),
            ]));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .title(" Help ")
            .title_style(Style::default().fg(palette.fg));
        f.render_widget(Paragraph::new(lines).block(block), rect);
    }

    fn render_logs(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let rect = LayoutManager::centered_rect(80, 70, area);
        f.render_widget(Clear, rect);

        let visible = rect.height.saturating_sub(2) as usize;
        let logs = self.logger.get_logs();
        let lines: Vec<Line> = logs
            .iter()
            .skip(self.logs_scroll)
            .take(visible)
            .map(|entry| Line::from(Span::styled(entry.clone(), Style::default().fg(palette.muted))))
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .title(" Logs · j/k scroll · Esc close ")
            .title_style(Style::default().fg(palette.fg));
        f.render_widget(Paragraph::new(lines).block(block), rect);
    }

    fn render_message(&self, f: &mut Frame, area: Rect, ctx: &RenderContext, title: &str, message: &str, error: bool) {
        let palette = &ctx.palette;
        let rect = LayoutManager::centered_rect(60, 30, area);
        f.render_widget(Clear, rect);

        let style = if error {
            Style::default().fg(palette.severity_high)
        } else {
            Style::default().fg(palette.fg)
        };
        let mut lines = vec![Line::default()];
        for line in wrap_text(message, rect.width.saturating_sub(4) as usize) {
            lines.push(Line::from(Span::styled(format!(" {line}"), style)));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " Enter or Esc to close",
            Style::default().fg(palette.muted),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if error { palette.severity_high } else { palette.border }))
            .title(format!(" {title} "))
            .title_style(style);
        f.render_widget(Paragraph::new(lines).block(block), rect);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(current) = self.current.clone() else {
            return Action::None;
        };

        match current {
            DialogType::Settings => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Left | KeyCode::Char('h') => {
                    self.appearance_cursor =
                        (self.appearance_cursor + APPEARANCE_OPTIONS.len() - 1) % APPEARANCE_OPTIONS.len();
                    Action::None
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.appearance_cursor = (self.appearance_cursor + 1) % APPEARANCE_OPTIONS.len();
                    Action::None
                }
                KeyCode::Char('1') => Action::SetThemePreference(ThemePreference::Light),
                KeyCode::Char('2') => Action::SetThemePreference(ThemePreference::Dark),
                KeyCode::Char('3') => Action::SetThemePreference(ThemePreference::System),
                KeyCode::Enter => Action::SetThemePreference(APPEARANCE_OPTIONS[self.appearance_cursor]),
                _ => Action::None,
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('G') => Action::HideDialog,
                KeyCode::Down | KeyCode::Char('j') => {
                    let max = self.logger.get_logs().len().saturating_sub(1);
                    self.logs_scroll = (self.logs_scroll + 1).min(max);
                    Action::None
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.logs_scroll = self.logs_scroll.saturating_sub(1);
                    Action::None
                }
                _ => Action::None,
            },
            DialogType::Help | DialogType::Info(_) | DialogType::Error(_) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('?') => Action::HideDialog,
                _ => Action::None,
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog) => {
                self.show(dialog);
                Action::None
            }
            Action::HideDialog => {
                self.hide();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        match self.current.clone() {
            Some(DialogType::Settings) => self.render_settings(f, rect, ctx),
            Some(DialogType::Help) => self.render_help(f, rect, ctx),
            Some(DialogType::Logs) => self.render_logs(f, rect, ctx),
            Some(DialogType::Info(message)) => self.render_message(f, rect, ctx, "Info", &message, false),
            Some(DialogType::Error(message)) => self.render_message(f, rect, ctx, "Error", &message, true),
            None => {}
        }
    }
}
