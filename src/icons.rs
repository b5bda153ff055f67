//! Icon service for managing different icon themes
//!
//! Centralizes the glyphs used across the TUI, with Unicode and ASCII
//! variants so the app stays usable on terminals without good font
//! coverage.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IconTheme {
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl IconTheme {
    /// Parse a config value; unknown strings fall back to the default.
    pub fn from_config(value: &str) -> Self {
        match value {
            "ascii" => Self::Ascii,
            _ => Self::Unicode,
        }
    }
}

/// Sidebar navigation icons
#[derive(Debug, Clone)]
pub struct NavIcons {
    pub dashboard: &'static str,
    pub history: &'static str,
    pub settings: &'static str,
}

/// General UI glyphs
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub brand: &'static str,
    pub menu: &'static str,
    pub collapse: &'static str,
    pub expand: &'static str,
    pub expanded_marker: &'static str,
    pub collapsed_marker: &'static str,
    pub upvote: &'static str,
    pub link: &'static str,
    pub dot: &'static str,
    pub resize_handle: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub nav: NavIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            nav: NavIcons {
                dashboard: "▦",
                history: "◷",
                settings: "⚙",
            },
            ui: UiIcons {
                brand: "◆",
                menu: "≡",
                collapse: "‹",
                expand: "›",
                expanded_marker: "▾",
                collapsed_marker: "▸",
                upvote: "↑",
                link: "↗",
                dot: "●",
                resize_handle: "┊",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            nav: NavIcons {
                dashboard: "#",
                history: "@",
                settings: "*",
            },
            ui: UiIcons {
                brand: "+",
                menu: "=",
                collapse: "<",
                expand: ">",
                expanded_marker: "v",
                collapsed_marker: ">",
                upvote: "^",
                link: "->",
                dot: "*",
                resize_handle: "|",
            },
        }
    }
}
