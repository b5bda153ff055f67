//! Constants used throughout the application
//!
//! This module centralizes layout geometry, preference keys, and other
//! constant values to improve maintainability and consistency.

// Sidebar geometry
//
// Sidebar width is tracked in device-independent px units, with a terminal
// cell treated as CELL_WIDTH_PX wide. Stored preferences stay on the same
// scale no matter what renders them.

/// Minimum sidebar width in px units
pub const SIDEBAR_MIN_WIDTH: u16 = 160;
/// Maximum sidebar width in px units
pub const SIDEBAR_MAX_WIDTH: u16 = 480;
/// Default sidebar width in px units
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 224;
/// Sidebar width in compact (icons-only) mode, in px units
pub const SIDEBAR_COMPACT_WIDTH: u16 = 64;
/// Width of one terminal column in px units
pub const CELL_WIDTH_PX: u16 = 8;

/// Terminal width in columns below which the shell switches to the
/// narrow presentation (header bar + drawer instead of a fixed sidebar)
pub const NARROW_BREAKPOINT: u16 = 70;
/// Minimum content area width in columns preserved at render time
pub const MAIN_AREA_MIN_WIDTH: u16 = 20;
/// Drawer panel width in columns for the narrow presentation
pub const DRAWER_WIDTH: u16 = 32;

// Preference store keys
pub const PREF_SIDEBAR_WIDTH: &str = "ui.sidebar.width";
pub const PREF_SIDEBAR_COMPACT: &str = "ui.sidebar.compact";
pub const PREF_THEME: &str = "theme";

// Chip input
/// Maximum number of subreddit chips accepted by the search input
pub const MAX_SUBREDDIT_CHIPS: usize = 5;

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const APP_TITLE: &str = "RedditPains";
