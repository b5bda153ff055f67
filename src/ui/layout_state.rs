//! Sidebar layout state machine
//!
//! Tracks sidebar width, the compact flag, the active drag session, and
//! the drawer flag for the narrow presentation. Width is kept in px units
//! (see [`crate::constants`]); one terminal column of pointer travel moves
//! the width by [`CELL_WIDTH_PX`].
//!
//! Width and compact changes write through to the preference store. The
//! one exception is `update_drag`, which mutates in memory only; the final
//! width of a gesture is persisted by `end_drag`, so the observable
//! end-state matches per-move write-through.

use crate::constants::{
    CELL_WIDTH_PX, PREF_SIDEBAR_COMPACT, PREF_SIDEBAR_WIDTH, SIDEBAR_COMPACT_WIDTH, SIDEBAR_DEFAULT_WIDTH,
    SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH,
};
use crate::prefs::PreferenceStore;

/// Clamp a candidate width into the allowed sidebar range.
pub fn clamp_width(width: i32) -> u16 {
    width.clamp(i32::from(SIDEBAR_MIN_WIDTH), i32::from(SIDEBAR_MAX_WIDTH)) as u16
}

/// Ephemeral record of one resize gesture. At most one exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub start_pointer_x: u16,
    pub start_width: u16,
}

#[derive(Debug, Clone)]
pub struct LayoutState {
    width: u16,
    compact: bool,
    drag: Option<DragSession>,
    drawer_open: bool,
    rehydrated: bool,
    store: PreferenceStore,
}

impl LayoutState {
    /// Compiled-in defaults; stored preferences are not consulted until
    /// [`LayoutState::rehydrate`] runs after the first frame.
    pub fn new(store: PreferenceStore) -> Self {
        Self {
            width: SIDEBAR_DEFAULT_WIDTH,
            compact: false,
            drag: None,
            drawer_open: false,
            rehydrated: false,
            store,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag
    }

    /// Width the sidebar actually renders at, in px units.
    pub fn effective_width(&self) -> u16 {
        if self.compact {
            SIDEBAR_COMPACT_WIDTH
        } else {
            self.width
        }
    }

    /// Restore persisted preferences. Applied once, after the first frame
    /// has painted with defaults; later calls are no-ops. A stored width
    /// is clamped into range and the clamped value (never the raw one) is
    /// written back.
    pub fn rehydrate(&mut self) {
        if self.rehydrated {
            return;
        }
        self.rehydrated = true;

        if let Some(stored) = self.store.read(PREF_SIDEBAR_WIDTH) {
            if let Ok(parsed) = stored.trim().parse::<i32>() {
                let clamped = clamp_width(parsed);
                self.width = clamped;
                self.store.write(PREF_SIDEBAR_WIDTH, &clamped.to_string());
            }
        }

        if let Some(stored) = self.store.read(PREF_SIDEBAR_COMPACT) {
            if stored == "true" {
                self.compact = true;
                self.store.write(PREF_SIDEBAR_COMPACT, "true");
            }
        }
    }

    pub fn is_rehydrated(&self) -> bool {
        self.rehydrated
    }

    /// Flip compact mode. Width is left alone so expanding later restores
    /// the previous size.
    pub fn toggle_compact(&mut self) {
        self.compact = !self.compact;
        self.store
            .write(PREF_SIDEBAR_COMPACT, if self.compact { "true" } else { "false" });
    }

    /// Start a resize gesture at the given pointer column. Ignored in
    /// compact mode. Any lingering session from a missed release is torn
    /// down first.
    pub fn begin_drag(&mut self, pointer_x: u16) {
        if self.compact {
            return;
        }
        self.end_drag();
        self.drag = Some(DragSession {
            start_pointer_x: pointer_x,
            start_width: self.width,
        });
    }

    /// Apply a pointer position to the active gesture. No-op when not
    /// dragging.
    pub fn update_drag(&mut self, pointer_x: u16) {
        if let Some(session) = self.drag {
            let delta = (i32::from(pointer_x) - i32::from(session.start_pointer_x)) * i32::from(CELL_WIDTH_PX);
            self.width = clamp_width(i32::from(session.start_width) + delta);
        }
    }

    /// Finish the gesture and persist the final width. Idempotent: both
    /// the release and cancel paths call this, as does the defensive
    /// teardown before a new gesture.
    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            self.store.write(PREF_SIDEBAR_WIDTH, &self.width.to_string());
        }
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }
}
