use redditpains::constants::{
    SIDEBAR_COMPACT_WIDTH, SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH,
};
use redditpains::prefs::PreferenceStore;
use redditpains::ui::layout_state::{clamp_width, LayoutState};

fn temp_store(name: &str) -> PreferenceStore {
    let path = std::env::temp_dir().join(format!("redditpains_layout_{}_{}.json", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    PreferenceStore::at_path(path)
}

#[test]
fn test_defaults_before_rehydration() {
    let state = LayoutState::new(temp_store("defaults"));
    assert_eq!(state.width(), SIDEBAR_DEFAULT_WIDTH);
    assert!(!state.is_compact());
    assert!(!state.is_dragging());
    assert!(!state.is_drawer_open());
    assert!(!state.is_rehydrated());
}

#[test]
fn test_drag_width_stays_clamped_for_any_delta() {
    let mut state = LayoutState::new(temp_store("clamp"));

    state.begin_drag(500);
    // Far left and far right of anything reasonable
    for x in [0u16, 1, 100, 499, 500, 501, 1000, u16::MAX] {
        state.update_drag(x);
        assert!(state.width() >= SIDEBAR_MIN_WIDTH, "width {} below min at x {}", state.width(), x);
        assert!(state.width() <= SIDEBAR_MAX_WIDTH, "width {} above max at x {}", state.width(), x);
    }
    state.end_drag();
}

#[test]
fn test_drag_moves_width_by_cell_units() {
    let mut state = LayoutState::new(temp_store("cells"));
    state.begin_drag(40);
    state.update_drag(45);
    // 5 columns of travel at 8px per column
    assert_eq!(state.width(), SIDEBAR_DEFAULT_WIDTH + 40);
    state.update_drag(35);
    assert_eq!(state.width(), SIDEBAR_DEFAULT_WIDTH - 40);
    state.end_drag();
}

#[test]
fn test_toggle_compact_twice_leaves_width_alone() {
    let mut state = LayoutState::new(temp_store("toggle"));
    state.begin_drag(40);
    state.update_drag(50);
    state.end_drag();
    let width = state.width();

    state.toggle_compact();
    assert!(state.is_compact());
    assert_eq!(state.width(), width);
    assert_eq!(state.effective_width(), SIDEBAR_COMPACT_WIDTH);

    state.toggle_compact();
    assert!(!state.is_compact());
    assert_eq!(state.width(), width);
    assert_eq!(state.effective_width(), width);
}

#[test]
fn test_rehydrate_clamps_and_writes_back_clamped_value() {
    let store = temp_store("rehydrate_clamp");
    store.write("ui.sidebar.width", "999");

    let mut state = LayoutState::new(store.clone());
    assert_eq!(state.width(), SIDEBAR_DEFAULT_WIDTH);

    state.rehydrate();
    assert_eq!(state.width(), SIDEBAR_MAX_WIDTH);
    // The clamped value is persisted, never the raw stored one
    assert_eq!(store.read("ui.sidebar.width"), Some("480".to_string()));
}

#[test]
fn test_rehydrate_is_applied_once() {
    let store = temp_store("rehydrate_once");
    store.write("ui.sidebar.width", "320");

    let mut state = LayoutState::new(store.clone());
    state.rehydrate();
    assert_eq!(state.width(), 320);

    // Mutate the stored value behind the state's back; a second call
    // must not re-apply it
    store.write("ui.sidebar.width", "200");
    state.rehydrate();
    assert_eq!(state.width(), 320);
}

#[test]
fn test_rehydrate_ignores_invalid_values() {
    let store = temp_store("rehydrate_invalid");
    store.write("ui.sidebar.width", "wide");
    store.write("ui.sidebar.compact", "yes");

    let mut state = LayoutState::new(store.clone());
    state.rehydrate();

    assert_eq!(state.width(), SIDEBAR_DEFAULT_WIDTH);
    assert!(!state.is_compact());
    // Invalid values are left in place, not rewritten
    assert_eq!(store.read("ui.sidebar.width"), Some("wide".to_string()));
}

#[test]
fn test_rehydrate_restores_compact() {
    let store = temp_store("rehydrate_compact");
    store.write("ui.sidebar.compact", "true");

    let mut state = LayoutState::new(store);
    state.rehydrate();
    assert!(state.is_compact());
    assert_eq!(state.effective_width(), SIDEBAR_COMPACT_WIDTH);
}

#[test]
fn test_begin_drag_refused_in_compact_mode() {
    let mut state = LayoutState::new(temp_store("compact_drag"));
    state.toggle_compact();
    state.begin_drag(40);
    assert!(!state.is_dragging());
}

#[test]
fn test_end_drag_is_idempotent() {
    let mut state = LayoutState::new(temp_store("end_idempotent"));
    state.end_drag();
    assert!(!state.is_dragging());

    state.begin_drag(40);
    state.end_drag();
    state.end_drag();
    assert!(!state.is_dragging());
}

#[test]
fn test_update_without_session_is_a_noop() {
    let mut state = LayoutState::new(temp_store("update_noop"));
    state.update_drag(300);
    assert_eq!(state.width(), SIDEBAR_DEFAULT_WIDTH);
}

#[test]
fn test_new_drag_tears_down_stale_session() {
    let mut state = LayoutState::new(temp_store("stale"));

    state.begin_drag(40);
    state.update_drag(50);
    let width_after_first = state.width();
    assert_eq!(width_after_first, SIDEBAR_DEFAULT_WIDTH + 40);

    // No pointer-up arrives; a second gesture starts anyway
    state.begin_drag(100);
    assert!(state.is_dragging());

    // Moves are resolved against the second session's baseline, so the
    // stale first session has no further effect
    state.update_drag(102);
    assert_eq!(state.width(), width_after_first + 16);
    state.end_drag();
}

#[test]
fn test_end_drag_persists_final_width() {
    let store = temp_store("persist");
    let mut state = LayoutState::new(store.clone());

    state.begin_drag(40);
    state.update_drag(45);
    // Nothing persisted mid-gesture
    assert_eq!(store.read("ui.sidebar.width"), None);

    state.end_drag();
    assert_eq!(store.read("ui.sidebar.width"), Some((SIDEBAR_DEFAULT_WIDTH + 40).to_string()));
}

#[test]
fn test_toggle_compact_persists_flag() {
    let store = temp_store("persist_compact");
    let mut state = LayoutState::new(store.clone());

    state.toggle_compact();
    assert_eq!(store.read("ui.sidebar.compact"), Some("true".to_string()));
    state.toggle_compact();
    assert_eq!(store.read("ui.sidebar.compact"), Some("false".to_string()));
}

#[test]
fn test_clamp_width_bounds() {
    assert_eq!(clamp_width(-50), SIDEBAR_MIN_WIDTH);
    assert_eq!(clamp_width(0), SIDEBAR_MIN_WIDTH);
    assert_eq!(clamp_width(160), 160);
    assert_eq!(clamp_width(224), 224);
    assert_eq!(clamp_width(480), 480);
    assert_eq!(clamp_width(99_999), SIDEBAR_MAX_WIDTH);
}

#[test]
fn test_drawer_flag_transitions() {
    let mut state = LayoutState::new(temp_store("drawer"));
    state.open_drawer();
    assert!(state.is_drawer_open());
    state.close_drawer();
    assert!(!state.is_drawer_open());
    // close with the drawer already closed is a no-op
    state.close_drawer();
    assert!(!state.is_drawer_open());
}
