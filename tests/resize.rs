use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use redditpains::constants::SIDEBAR_DEFAULT_WIDTH;
use redditpains::prefs::PreferenceStore;
use redditpains::ui::layout_state::LayoutState;
use redditpains::ui::resize::ResizeController;

fn temp_store(name: &str) -> PreferenceStore {
    let path = std::env::temp_dir().join(format!("redditpains_resize_{}_{}.json", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    PreferenceStore::at_path(path)
}

fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row: 10,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_press_move_release_cycle() {
    let mut layout = LayoutState::new(temp_store("cycle"));
    let mut resize = ResizeController::new();

    resize.begin(&mut layout, 27);
    assert!(resize.is_active());
    assert!(layout.is_dragging());

    assert!(resize.handle_mouse(&mut layout, mouse(MouseEventKind::Drag(MouseButton::Left), 32)));
    assert_eq!(layout.width(), SIDEBAR_DEFAULT_WIDTH + 40);

    assert!(resize.handle_mouse(&mut layout, mouse(MouseEventKind::Up(MouseButton::Left), 32)));
    assert!(!resize.is_active());
    assert!(!layout.is_dragging());
}

#[test]
fn test_events_ignored_without_capture() {
    let mut layout = LayoutState::new(temp_store("inactive"));
    let mut resize = ResizeController::new();

    assert!(!resize.handle_mouse(&mut layout, mouse(MouseEventKind::Moved, 50)));
    assert_eq!(layout.width(), SIDEBAR_DEFAULT_WIDTH);
}

#[test]
fn test_moves_after_release_have_no_effect() {
    let mut layout = LayoutState::new(temp_store("released"));
    let mut resize = ResizeController::new();

    resize.begin(&mut layout, 27);
    resize.handle_mouse(&mut layout, mouse(MouseEventKind::Up(MouseButton::Left), 27));
    let width = layout.width();

    assert!(!resize.handle_mouse(&mut layout, mouse(MouseEventKind::Moved, 60)));
    assert_eq!(layout.width(), width);
}

#[test]
fn test_cancel_releases_capture_and_session() {
    let mut layout = LayoutState::new(temp_store("cancel"));
    let mut resize = ResizeController::new();

    resize.begin(&mut layout, 27);
    resize.handle_mouse(&mut layout, mouse(MouseEventKind::Drag(MouseButton::Left), 30));

    resize.cancel(&mut layout);
    assert!(!resize.is_active());
    assert!(!layout.is_dragging());

    // Cancel with nothing active is safe
    resize.cancel(&mut layout);
    assert!(!resize.is_active());
}

#[test]
fn test_second_begin_tears_down_first_session() {
    let mut layout = LayoutState::new(temp_store("second_begin"));
    let mut resize = ResizeController::new();

    resize.begin(&mut layout, 27);
    resize.handle_mouse(&mut layout, mouse(MouseEventKind::Drag(MouseButton::Left), 30));
    let width_after_first = layout.width();

    // The release was missed; the user presses the handle again
    resize.begin(&mut layout, 40);
    assert!(resize.is_active());

    // Movement resolves against the fresh session, not the stale one
    resize.handle_mouse(&mut layout, mouse(MouseEventKind::Drag(MouseButton::Left), 41));
    assert_eq!(layout.width(), width_after_first + 8);
}

#[test]
fn test_press_while_captured_drops_stale_session() {
    let mut layout = LayoutState::new(temp_store("stale_press"));
    let mut resize = ResizeController::new();

    resize.begin(&mut layout, 27);
    resize.handle_mouse(&mut layout, mouse(MouseEventKind::Drag(MouseButton::Left), 30));
    assert!(resize.is_active());

    // A fresh press arrives without any release in between: the stale
    // capture is dropped and the press is handed back unconsumed
    let consumed = resize.handle_mouse(&mut layout, mouse(MouseEventKind::Down(MouseButton::Left), 40));
    assert!(!consumed);
    assert!(!resize.is_active());
    assert!(!layout.is_dragging());
}

#[test]
fn test_begin_in_compact_mode_holds_no_capture() {
    let mut layout = LayoutState::new(temp_store("compact"));
    let mut resize = ResizeController::new();
    layout.toggle_compact();

    resize.begin(&mut layout, 7);
    assert!(!resize.is_active());
    assert!(!layout.is_dragging());
}
