//! Application shell
//!
//! Composes the sidebar, the content views, the status bar, and the
//! dialogs, and owns the adaptive-shell state: the sidebar layout state
//! machine, the resize controller, and the theme resolver. The
//! presentation (fixed sidebar vs. header + drawer) is decided from the
//! frame width on every render; event routing uses the geometry of the
//! last frame drawn.

use crate::config::Config;
use crate::constants::APP_TITLE;
use crate::icons::{IconService, IconTheme};
use crate::logger::Logger;
use crate::prefs::PreferenceStore;
use crate::reports::ReportStore;
use crate::theme::{detect_system_scheme, Palette, SchemeWatcher, ThemeResolver};
use crate::ui::components::{
    DashboardComponent, DialogComponent, HistoryComponent, ResultsComponent, SidebarComponent, StatusBar,
};
use crate::ui::core::{actions::Action, Component, DialogType, EventType, RenderContext, View};
use crate::ui::layout::LayoutManager;
use crate::ui::layout_state::LayoutState;
use crate::ui::resize::ResizeController;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use tokio::sync::mpsc;

/// Geometry of the last rendered frame, cached for mouse routing.
#[derive(Debug, Default, Clone, Copy)]
struct FrameGeometry {
    narrow: bool,
    sidebar: Option<Rect>,
    handle_column: Option<u16>,
    drawer: Option<Rect>,
    header: Option<Rect>,
}

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    dashboard: DashboardComponent,
    history: HistoryComponent,
    results: ResultsComponent,
    dialog: DialogComponent,

    // Adaptive shell state
    layout: LayoutState,
    resize: ResizeController,
    theme: ThemeResolver,
    scheme_watcher: Option<SchemeWatcher>,
    palette: Palette,

    // Services
    background_tx: mpsc::UnboundedSender<Action>,
    background_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    icons: IconService,

    view: View,
    geometry: FrameGeometry,
    rehydrated: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, store: PreferenceStore, logger: Logger) -> Self {
        let reports = ReportStore::new();
        let (background_tx, background_rx) = mpsc::unbounded_channel();

        Self {
            sidebar: SidebarComponent::new(),
            dashboard: DashboardComponent::new(reports),
            history: HistoryComponent::new(reports),
            results: ResultsComponent::new(reports),
            dialog: DialogComponent::new(logger.clone()),
            layout: LayoutState::new(store.clone()),
            resize: ResizeController::new(),
            theme: ThemeResolver::new(store),
            scheme_watcher: None,
            palette: Palette::terminal_default(),
            background_tx,
            background_rx,
            logger,
            icons: IconService::new(IconTheme::from_config(&config.ui.icon_theme)),
            view: View::default(),
            geometry: FrameGeometry::default(),
            rehydrated: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    pub fn theme(&self) -> &ThemeResolver {
        &self.theme
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Restore persisted state. The renderer calls this after the first
    /// frame has painted with defaults, so rehydration is a distinct,
    /// observable second update. Idempotent.
    pub fn rehydrate(&mut self) {
        if self.rehydrated {
            return;
        }
        self.rehydrated = true;

        self.layout.rehydrate();
        self.theme.resolve(detect_system_scheme());
        self.apply_presentation();

        self.logger.log(format!(
            "Shell: rehydrated (width {}px, compact {}, theme {:?})",
            self.layout.width(),
            self.layout.is_compact(),
            self.theme.preference()
        ));
    }

    /// Release everything the shell holds on global resources: an active
    /// drag capture and the scheme watcher. Runs on every exit path.
    pub fn teardown(&mut self) {
        self.resize.cancel(&mut self.layout);
        if let Some(watcher) = self.scheme_watcher.take() {
            watcher.abort();
        }
    }

    /// The single place presentation side effects happen: recompute the
    /// palette from the resolver and keep the scheme subscription in step
    /// with the preference. Idempotent; called after every transition.
    fn apply_presentation(&mut self) {
        self.palette = match self.theme.theme() {
            Some(theme) => Palette::for_theme(theme),
            None => Palette::terminal_default(),
        };

        if self.theme.wants_scheme_events() {
            if self.scheme_watcher.is_none() {
                self.scheme_watcher = Some(SchemeWatcher::spawn(self.background_tx.clone()));
            }
        } else if let Some(watcher) = self.scheme_watcher.take() {
            watcher.abort();
        }
    }

    fn sync_component_data(&mut self) {
        self.sidebar.set_active(self.view.clone());
        self.dialog.update_data(self.theme.preference());
    }

    /// Drain actions produced by background tasks (the scheme watcher).
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_rx.try_recv() {
            self.logger.log(format!("Background: received action {action:?}"));
            actions.push(action);
        }
        actions
    }

    /// Process an event through the component hierarchy.
    pub fn handle_event(&mut self, event: EventType) -> anyhow::Result<()> {
        self.sync_component_data();

        let action = match event {
            EventType::Key(key) if key.kind == KeyEventKind::Press => self.route_key(key),
            EventType::Key(_) => Action::None,
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::FocusLost => {
                // drag cancel: the capture must not survive focus loss
                self.resize.cancel(&mut self.layout);
                Action::None
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.apply_action(action);
        Ok(())
    }

    /// Route an action through the dialog, then handle it at app level.
    pub fn apply_action(&mut self, action: Action) {
        let action = self.dialog.update(action);
        self.handle_app_action(action);
        self.apply_presentation();
    }

    fn text_input_focused(&self) -> bool {
        match self.view {
            View::Dashboard => self.dashboard.chips.is_focused(),
            View::History => self.history.is_filter_focused(),
            View::Results(_) => false,
        }
    }

    fn active_view_component(&mut self) -> &mut dyn Component {
        match self.view {
            View::Dashboard => &mut self.dashboard,
            View::History => &mut self.history,
            View::Results(_) => &mut self.results,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        // Dialogs have priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        // A focused text input owns the keyboard outright, so typing 'q'
        // types 'q'
        if self.text_input_focused() {
            return self.active_view_component().handle_key_events(key);
        }

        // Escape peels the topmost transient surface and nothing else
        if key.code == KeyCode::Esc {
            if self.geometry.narrow && self.layout.is_drawer_open() {
                return Action::CloseDrawer;
            }
            return Action::None;
        }

        // While the drawer covers the content, the content gets no keys
        if self.geometry.narrow && self.layout.is_drawer_open() {
            return match key.code {
                KeyCode::Char('m') => Action::CloseDrawer,
                KeyCode::Char('q') => Action::Quit,
                _ => Action::None,
            };
        }

        let view_action = self.active_view_component().handle_key_events(key);
        if !matches!(view_action, Action::None) {
            return view_action;
        }

        self.handle_global_key(key)
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('s') => Action::ShowDialog(DialogType::Settings),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('c') if !self.geometry.narrow => Action::ToggleCompact,
            KeyCode::Char('m') if self.geometry.narrow => {
                if self.layout.is_drawer_open() {
                    Action::CloseDrawer
                } else {
                    Action::OpenDrawer
                }
            }
            KeyCode::Char('1') => Action::NavigateTo(View::Dashboard),
            KeyCode::Char('2') => Action::NavigateTo(View::History),
            _ => Action::None,
        }
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        // An active capture swallows every mouse event, wherever the
        // pointer is. A press it hands back means the capture was stale;
        // it falls through to normal routing.
        if self.resize.is_active() && self.resize.handle_mouse(&mut self.layout, mouse) {
            return Action::None;
        }

        if self.dialog.is_visible() {
            return Action::None;
        }

        if self.geometry.narrow {
            return self.route_mouse_narrow(mouse);
        }
        self.route_mouse_wide(mouse)
    }

    fn route_mouse_narrow(&mut self, mouse: MouseEvent) -> Action {
        if self.layout.is_drawer_open() {
            if let Some(drawer) = self.geometry.drawer {
                if rect_contains(drawer, mouse.column, mouse.row) {
                    return self.sidebar.handle_mouse(mouse, drawer);
                }
            }
            // Anything on the backdrop dismisses; scrolling is suppressed
            if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
                return Action::CloseDrawer;
            }
            return Action::None;
        }

        if let Some(header) = self.geometry.header {
            if rect_contains(header, mouse.column, mouse.row)
                && matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                && mouse.column < header.x + 4
            {
                return Action::OpenDrawer;
            }
        }

        self.route_content_scroll(mouse)
    }

    fn route_mouse_wide(&mut self, mouse: MouseEvent) -> Action {
        // Only a primary-button press on the handle starts a resize; the
        // press never reaches any other component
        if let Some(handle_column) = self.geometry.handle_column {
            if mouse.column == handle_column && matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
                self.resize.begin(&mut self.layout, mouse.column);
                return Action::None;
            }
        }

        if let Some(sidebar) = self.geometry.sidebar {
            if rect_contains(sidebar, mouse.column, mouse.row) {
                return self.sidebar.handle_mouse(mouse, sidebar);
            }
        }

        self.route_content_scroll(mouse)
    }

    fn route_content_scroll(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.view_scroll(true),
            MouseEventKind::ScrollDown => self.view_scroll(false),
            _ => {}
        }
        Action::None
    }

    fn view_scroll(&mut self, up: bool) {
        match self.view {
            View::Dashboard => self.dashboard.handle_scroll(up),
            View::History => self.history.handle_scroll(up),
            View::Results(_) => self.results.handle_scroll(up),
        }
    }

    /// Handle app-level actions that mutate shell state.
    fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.logger.log("Shell: quitting".to_string());
                self.should_quit = true;
            }
            Action::NavigateTo(view) => self.set_view(view),
            Action::OpenReport(id) => {
                self.logger.log(format!("Navigation: opening report {id}"));
                self.results.load(&id);
                self.set_view(View::Results(id));
            }
            Action::ToggleCompact => {
                // a live gesture cannot survive the handle disappearing
                self.resize.cancel(&mut self.layout);
                self.layout.toggle_compact();
                self.logger
                    .log(format!("Layout: compact = {}", self.layout.is_compact()));
            }
            Action::OpenDrawer => {
                if self.geometry.narrow {
                    self.layout.open_drawer();
                }
            }
            Action::CloseDrawer => self.layout.close_drawer(),
            Action::SetThemePreference(preference) => {
                self.logger.log(format!("Theme: preference set to {preference:?}"));
                self.theme.set_preference(preference, detect_system_scheme());
            }
            Action::SystemSchemeChanged(scheme) => {
                self.logger.log(format!("Theme: system scheme changed to {scheme:?}"));
                self.theme.on_system_scheme(scheme);
            }
            // Dialog actions are absorbed by DialogComponent::update
            Action::ShowDialog(_) | Action::HideDialog | Action::None => {}
        }
    }

    fn set_view(&mut self, view: View) {
        self.logger.log(format!("Navigation: view = {view:?}"));
        self.view = view.clone();
        self.sidebar.set_active(view);
        // navigating from the drawer dismisses it
        self.layout.close_drawer();
    }

    fn render_context(&self, sidebar_compact: bool) -> RenderContext {
        RenderContext {
            palette: self.palette,
            icons: self.icons.icons(),
            resizing: self.layout.is_dragging(),
            drawer_open: self.geometry.narrow && self.layout.is_drawer_open(),
            sidebar_compact,
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        let narrow = LayoutManager::is_narrow(area);
        let mut geometry = FrameGeometry {
            narrow,
            ..Default::default()
        };
        self.geometry.narrow = narrow;

        f.render_widget(
            Block::default().style(Style::default().bg(self.palette.bg).fg(self.palette.fg)),
            area,
        );

        let chunks = LayoutManager::main_layout(area);
        let ctx = self.render_context(self.layout.is_compact());

        if narrow {
            let rows = LayoutManager::narrow_layout(chunks[0]);
            geometry.header = Some(rows[0]);
            self.render_header(f, rows[0], &ctx);
            self.render_view(f, rows[1], &ctx);

            if self.layout.is_drawer_open() {
                let drawer = LayoutManager::drawer_rect(chunks[0]);
                geometry.drawer = Some(drawer);
                f.render_widget(Clear, drawer);
                // the drawer always shows the full sidebar
                let drawer_ctx = self.render_context(false);
                self.sidebar.render(f, drawer, &drawer_ctx);
            }
        } else {
            let sidebar_cols = LayoutManager::sidebar_columns(self.layout.effective_width(), chunks[0]);
            let cols = LayoutManager::wide_layout(chunks[0], sidebar_cols);
            geometry.sidebar = Some(cols[0]);
            self.sidebar.render(f, cols[0], &ctx);

            // the resize handle exists only alongside the full sidebar
            if !self.layout.is_compact() && cols[0].width > 0 {
                let handle_column = cols[0].x + cols[0].width - 1;
                geometry.handle_column = Some(handle_column);
                self.render_handle(f, cols[0], handle_column, &ctx);
            }

            self.render_view(f, cols[1], &ctx);
        }

        StatusBar::render(f, chunks[1], &ctx, &self.view, &self.layout, narrow);

        if self.dialog.is_visible() {
            self.dialog.render(f, area, &ctx);
        }

        self.geometry = geometry;
    }

    fn render_view(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        match self.view {
            View::Dashboard => self.dashboard.render(f, rect, ctx),
            View::History => self.history.render(f, rect, ctx),
            View::Results(_) => self.results.render(f, rect, ctx),
        }
    }

    fn render_header(&self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", ctx.icons.ui.menu),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(APP_TITLE, Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)),
        ]))
        .style(Style::default().bg(palette.selection_bg));
        f.render_widget(header, rect);
    }

    fn render_handle(&self, f: &mut Frame, sidebar: Rect, handle_column: u16, ctx: &RenderContext) {
        if sidebar.height < 3 {
            return;
        }
        let palette = &ctx.palette;
        let style = if ctx.resizing {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.muted)
        };
        let glyph = ctx.icons.ui.resize_handle;
        let mid = sidebar.y + sidebar.height / 2;
        let rect = Rect::new(handle_column, mid.saturating_sub(1), 1, 3);
        let lines: Vec<Line> = (0..3).map(|_| Line::from(Span::styled(glyph, style))).collect();
        f.render_widget(Paragraph::new(lines), rect);
    }
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}
