//! Terminal lifecycle and the async event loop
//!
//! The first frame is drawn with compiled-in defaults before any stored
//! preference is consulted; rehydration runs right after it as a distinct
//! second update, then the loop starts processing events.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

use super::app_component::AppComponent;
use super::core::{EventHandler, EventType};
use crate::config::Config;
use crate::logger::Logger;
use crate::prefs::PreferenceStore;

/// Run the main TUI application
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let store = PreferenceStore::open_default();
    let mut app = AppComponent::new(&config, store, logger);
    let mut event_handler = EventHandler::new();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Shell teardown must run even when the loop errored: a drag capture
    // or scheme watcher must not outlive the app
    app.teardown();

    // Restore terminal
    disable_raw_mode()?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    // Frame one paints defaults; stored preferences land afterwards
    terminal.draw(|f| app.render(f))?;
    app.rehydrate();

    let mut needs_render = true;
    loop {
        if needs_render {
            terminal.draw(|f| app.render(f))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Tick => {
                // Background actions (scheme watcher) drain on tick
                let background_actions = app.process_background_actions();
                for action in background_actions {
                    app.apply_action(action);
                    needs_render = true;
                }
            }
            event => {
                app.handle_event(event)?;
                needs_render = true;
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
