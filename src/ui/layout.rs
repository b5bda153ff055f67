//! Layout management and calculations

use crate::constants::{CELL_WIDTH_PX, DRAWER_WIDTH, MAIN_AREA_MIN_WIDTH, NARROW_BREAKPOINT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Whether the frame is narrow enough for the header + drawer
    /// presentation. Decided per frame, never cached.
    #[must_use]
    pub fn is_narrow(area: Rect) -> bool {
        area.width < NARROW_BREAKPOINT
    }

    /// Sidebar width in columns for an effective width in px units,
    /// capped so the content area keeps a usable minimum. The cap is
    /// render-only; stored state never sees it.
    #[must_use]
    pub fn sidebar_columns(effective_width_px: u16, area: Rect) -> u16 {
        let cols = effective_width_px / CELL_WIDTH_PX;
        cols.min(area.width.saturating_sub(MAIN_AREA_MIN_WIDTH))
    }

    /// Calculate the main layout areas (content on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }

    /// Calculate the wide-presentation layout (sidebar + content)
    #[must_use]
    pub fn wide_layout(area: Rect, sidebar_cols: u16) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_cols), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Calculate the narrow-presentation layout (header bar + content)
    #[must_use]
    pub fn narrow_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Drawer panel rect for the narrow presentation: pinned to the left
    /// edge, at most 85% of the frame width.
    #[must_use]
    pub fn drawer_rect(area: Rect) -> Rect {
        let width = DRAWER_WIDTH.min((u32::from(area.width) * 85 / 100) as u16).max(1);
        Rect::new(area.x, area.y, width, area.height)
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
