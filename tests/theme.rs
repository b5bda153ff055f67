use redditpains::prefs::PreferenceStore;
use redditpains::theme::{scheme_from_colorfgbg, Palette, Theme, ThemePreference, ThemeResolver};

fn temp_store(name: &str) -> PreferenceStore {
    let path = std::env::temp_dir().join(format!("redditpains_theme_{}_{}.json", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    PreferenceStore::at_path(path)
}

#[test]
fn test_preference_parsing() {
    assert_eq!(ThemePreference::from_stored(Some("light")), Some(ThemePreference::Light));
    assert_eq!(ThemePreference::from_stored(Some("dark")), Some(ThemePreference::Dark));
    assert_eq!(ThemePreference::from_stored(Some("system")), Some(ThemePreference::System));
    assert_eq!(ThemePreference::from_stored(Some("blue")), None);
    assert_eq!(ThemePreference::from_stored(None), None);
}

#[test]
fn test_unresolved_phase_reports_nothing() {
    let resolver = ThemeResolver::new(temp_store("unresolved"));
    assert!(!resolver.is_resolved());
    assert_eq!(resolver.preference(), None);
    assert_eq!(resolver.theme(), None);
    assert!(!resolver.wants_scheme_events());
}

#[test]
fn test_invalid_stored_value_resolves_to_system() {
    let store = temp_store("invalid");
    store.write("theme", "blue");

    let mut resolver = ThemeResolver::new(store);
    resolver.resolve(Theme::Dark);

    // Invalid stored value means system, effective = OS scheme at
    // resolution time
    assert_eq!(resolver.preference(), Some(ThemePreference::System));
    assert_eq!(resolver.theme(), Some(Theme::Dark));
    assert!(resolver.wants_scheme_events());
}

#[test]
fn test_stored_preference_wins_over_os_scheme() {
    let store = temp_store("stored");
    store.write("theme", "light");

    let mut resolver = ThemeResolver::new(store);
    resolver.resolve(Theme::Dark);

    assert_eq!(resolver.preference(), Some(ThemePreference::Light));
    assert_eq!(resolver.theme(), Some(Theme::Light));
    assert!(!resolver.wants_scheme_events());
}

#[test]
fn test_resolve_is_idempotent() {
    let mut resolver = ThemeResolver::new(temp_store("idempotent"));
    resolver.resolve(Theme::Light);
    assert_eq!(resolver.theme(), Some(Theme::Light));

    // A later call with a different scheme must not re-resolve
    resolver.resolve(Theme::Dark);
    assert_eq!(resolver.theme(), Some(Theme::Light));
}

#[test]
fn test_set_preference_writes_through_and_recomputes() {
    let store = temp_store("set_pref");
    let mut resolver = ThemeResolver::new(store.clone());
    resolver.resolve(Theme::Dark);

    resolver.set_preference(ThemePreference::Light, Theme::Dark);

    assert_eq!(resolver.theme(), Some(Theme::Light));
    assert_eq!(store.read("theme"), Some("light".to_string()));
}

#[test]
fn test_scheme_change_reacts_only_while_system() {
    let mut resolver = ThemeResolver::new(temp_store("scheme_change"));
    resolver.resolve(Theme::Dark);
    assert_eq!(resolver.theme(), Some(Theme::Dark));

    // While system, scheme flips flow through
    resolver.on_system_scheme(Theme::Light);
    assert_eq!(resolver.theme(), Some(Theme::Light));

    // Switching away from system releases the subscription...
    resolver.set_preference(ThemePreference::Light, Theme::Light);
    assert!(!resolver.wants_scheme_events());

    // ...so a later scheme flip changes nothing
    resolver.on_system_scheme(Theme::Dark);
    assert_eq!(resolver.theme(), Some(Theme::Light));
}

#[test]
fn test_back_to_system_resubscribes() {
    let mut resolver = ThemeResolver::new(temp_store("resub"));
    resolver.resolve(Theme::Dark);
    resolver.set_preference(ThemePreference::Light, Theme::Dark);
    assert!(!resolver.wants_scheme_events());

    resolver.set_preference(ThemePreference::System, Theme::Dark);
    assert!(resolver.wants_scheme_events());
    assert_eq!(resolver.theme(), Some(Theme::Dark));
}

#[test]
fn test_colorfgbg_parsing() {
    assert_eq!(scheme_from_colorfgbg("0;15"), Theme::Light);
    assert_eq!(scheme_from_colorfgbg("0;7"), Theme::Light);
    assert_eq!(scheme_from_colorfgbg("15;0"), Theme::Dark);
    assert_eq!(scheme_from_colorfgbg("15;default;0"), Theme::Dark);
    assert_eq!(scheme_from_colorfgbg("garbage"), Theme::Dark);
    assert_eq!(scheme_from_colorfgbg(""), Theme::Dark);
}

#[test]
fn test_palettes_differ_per_theme() {
    let light = Palette::for_theme(Theme::Light);
    let dark = Palette::for_theme(Theme::Dark);
    assert_ne!(light, dark);

    // The unresolved palette commits to no background
    let neutral = Palette::terminal_default();
    assert_eq!(neutral.bg, ratatui::style::Color::Reset);
    assert_eq!(neutral.fg, ratatui::style::Color::Reset);
}
