//! Theme resolution
//!
//! Derives the effective light/dark theme from a tri-state user preference
//! (`light`, `dark`, `system`) and the terminal's detected color scheme.
//! The resolver is deliberately two-phase: until the stored preference has
//! been read it reports nothing, and the renderer paints with the
//! terminal's own colors, so the first frame can never flash a theme that
//! contradicts the stored preference.

use crate::constants::PREF_THEME;
use crate::prefs::PreferenceStore;
use crate::ui::core::actions::Action;
use ratatui::style::Color;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

/// A concrete theme, as rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// What the user asked for, which may defer to the system scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parse a stored preference. Anything but the three valid literals is
    /// treated as absent.
    pub fn from_stored(stored: Option<&str>) -> Option<Self> {
        match stored {
            Some("light") => Some(Self::Light),
            Some("dark") => Some(Self::Dark),
            Some("system") => Some(Self::System),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Resolved {
    preference: ThemePreference,
    effective: Theme,
}

/// Two-phase theme resolver.
///
/// Starts uninitialized; `resolve` reads the stored preference and computes
/// the effective theme. While the preference is `System` the shell keeps a
/// [`SchemeWatcher`] alive and feeds scheme flips back through
/// [`ThemeResolver::on_system_scheme`].
#[derive(Debug)]
pub struct ThemeResolver {
    store: PreferenceStore,
    resolved: Option<Resolved>,
}

impl ThemeResolver {
    pub fn new(store: PreferenceStore) -> Self {
        Self { store, resolved: None }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// The user's preference, or `None` before resolution.
    pub fn preference(&self) -> Option<ThemePreference> {
        self.resolved.map(|r| r.preference)
    }

    /// The effective theme, or `None` before resolution.
    pub fn theme(&self) -> Option<Theme> {
        self.resolved.map(|r| r.effective)
    }

    /// Read the stored preference and enter the resolved phase. Missing or
    /// invalid stored values resolve to `System`. Calling this again is a
    /// no-op.
    pub fn resolve(&mut self, os_scheme: Theme) {
        if self.resolved.is_some() {
            return;
        }
        let preference = ThemePreference::from_stored(self.store.read(PREF_THEME).as_deref())
            .unwrap_or(ThemePreference::System);
        self.resolved = Some(Resolved {
            preference,
            effective: effective_for(preference, os_scheme),
        });
    }

    /// Apply an explicit user selection: write-through to the store and
    /// recompute the effective theme synchronously.
    pub fn set_preference(&mut self, preference: ThemePreference, os_scheme: Theme) {
        self.store.write(PREF_THEME, preference.as_str());
        self.resolved = Some(Resolved {
            preference,
            effective: effective_for(preference, os_scheme),
        });
    }

    /// React to a system scheme change. Only has an effect while resolved
    /// with preference `System`.
    pub fn on_system_scheme(&mut self, os_scheme: Theme) {
        if let Some(resolved) = &mut self.resolved {
            if resolved.preference == ThemePreference::System {
                resolved.effective = os_scheme;
            }
        }
    }

    /// Whether a scheme subscription should currently be live.
    pub fn wants_scheme_events(&self) -> bool {
        self.preference() == Some(ThemePreference::System)
    }
}

fn effective_for(preference: ThemePreference, os_scheme: Theme) -> Theme {
    match preference {
        ThemePreference::Light => Theme::Light,
        ThemePreference::Dark => Theme::Dark,
        ThemePreference::System => os_scheme,
    }
}

/// Probe the terminal's color scheme via the `COLORFGBG` convention.
/// Backgrounds 7 and 15 are the light palette entries; anything else, or an
/// unreadable variable, is treated as dark.
pub fn detect_system_scheme() -> Theme {
    match std::env::var("COLORFGBG") {
        Ok(value) => scheme_from_colorfgbg(&value),
        Err(_) => Theme::Dark,
    }
}

pub fn scheme_from_colorfgbg(value: &str) -> Theme {
    match value.rsplit(';').next().and_then(|bg| bg.trim().parse::<u8>().ok()) {
        Some(7) | Some(15) => Theme::Light,
        _ => Theme::Dark,
    }
}

/// Background task that re-probes the system scheme and reports flips
/// through the app's action channel. Aborted (also on drop) when the
/// preference stops being `System`.
#[derive(Debug)]
pub struct SchemeWatcher {
    handle: JoinHandle<()>,
}

impl SchemeWatcher {
    pub fn spawn(tx: mpsc::UnboundedSender<Action>) -> Self {
        let handle = tokio::spawn(async move {
            let mut last = detect_system_scheme();
            let mut ticker = interval(Duration::from_secs(2));
            loop {
                ticker.tick().await;
                let current = detect_system_scheme();
                if current != last {
                    last = current;
                    if tx.send(Action::SystemSchemeChanged(current)).is_err() {
                        break;
                    }
                }
            }
        });
        Self { handle }
    }

    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Drop for SchemeWatcher {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Color tokens for one theme, shared by every rendering component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub selection_bg: Color,
    pub severity_high: Color,
    pub severity_medium: Color,
    pub severity_low: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Rgb(24, 24, 27),
                fg: Color::Rgb(228, 228, 231),
                muted: Color::Rgb(161, 161, 170),
                border: Color::Rgb(63, 63, 70),
                accent: Color::Rgb(249, 115, 22),
                selection_bg: Color::Rgb(39, 39, 42),
                severity_high: Color::Rgb(239, 68, 68),
                severity_medium: Color::Rgb(249, 115, 22),
                severity_low: Color::Rgb(234, 179, 8),
            },
            Theme::Light => Self {
                bg: Color::Rgb(250, 250, 250),
                fg: Color::Rgb(24, 24, 27),
                muted: Color::Rgb(113, 113, 122),
                border: Color::Rgb(212, 212, 216),
                accent: Color::Rgb(234, 88, 12),
                selection_bg: Color::Rgb(228, 228, 231),
                severity_high: Color::Rgb(220, 38, 38),
                severity_medium: Color::Rgb(234, 88, 12),
                severity_low: Color::Rgb(202, 138, 4),
            },
        }
    }

    /// Palette used before the theme has resolved: the terminal's own
    /// colors, so the first frame commits to nothing.
    pub fn terminal_default() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::Reset,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            accent: Color::Reset,
            selection_bg: Color::DarkGray,
            severity_high: Color::Red,
            severity_medium: Color::Yellow,
            severity_low: Color::Gray,
        }
    }
}
