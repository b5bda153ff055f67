//! Resize controller
//!
//! Bridges a left-button press on the sidebar's resize handle to a
//! captured drag: while the capture is held, every mouse event routes here
//! no matter where the pointer is, until the button is released or the
//! gesture is canceled. Every exit path (release, cancel, shell teardown,
//! a defensive re-acquire) drops the capture and closes the drag session;
//! there is no partially-torn-down state.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::layout_state::LayoutState;

#[derive(Debug, Default)]
pub struct ResizeController {
    captured: bool,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag capture is currently held.
    pub fn is_active(&self) -> bool {
        self.captured
    }

    /// Acquire the capture and start a drag session at `column`. A stale
    /// capture left behind by a missed release is released first.
    pub fn begin(&mut self, layout: &mut LayoutState, column: u16) {
        self.release(layout);
        layout.begin_drag(column);
        // compact mode refuses the session; don't hold a capture for it
        self.captured = layout.is_dragging();
    }

    /// Route a mouse event while the capture is held. Returns `true` when
    /// the event was consumed and must not reach any other component.
    pub fn handle_mouse(&mut self, layout: &mut LayoutState, mouse: MouseEvent) -> bool {
        if !self.captured {
            return false;
        }
        match mouse.kind {
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                layout.update_drag(mouse.column);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.release(layout);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                // A press while captured means the release was missed.
                // Drop the stale session and hand the press back to
                // normal routing, which may start a fresh one.
                self.release(layout);
                return false;
            }
            _ => {}
        }
        true
    }

    /// Cancel the gesture (terminal focus loss, shell teardown). Safe to
    /// call with no capture held.
    pub fn cancel(&mut self, layout: &mut LayoutState) {
        self.release(layout);
    }

    fn release(&mut self, layout: &mut LayoutState) {
        self.captured = false;
        layout.end_drag();
    }
}
