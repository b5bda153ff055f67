use crate::theme::{Theme, ThemePreference};

/// The screen currently shown in the content area
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    History,
    /// Results for a research run, by run id
    Results(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NavigateTo(View),
    OpenReport(String),

    // Shell
    ToggleCompact,
    OpenDrawer,
    CloseDrawer,

    // Theme
    SetThemePreference(ThemePreference),
    SystemSchemeChanged(Theme),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    Settings,
    Help,
    Logs,
    Info(String),
    Error(String),
}
