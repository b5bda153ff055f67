use super::actions::Action;
use super::context::RenderContext;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A focusable piece of the interface.
///
/// The shell routes key events to whichever component owns them and
/// feeds the returned [`Action`] back through the hierarchy. Rendering
/// is stateless apart from the per-frame [`RenderContext`].
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn update(&mut self, action: Action) -> Action {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext);

    // Optional lifecycle methods
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}
