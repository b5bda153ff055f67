use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use redditpains::ui::components::chip_input::{ChipError, ChipInput};
use redditpains::ui::core::Component;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(input: &mut ChipInput, text: &str) {
    for c in text.chars() {
        input.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_add_chip_validates_names() {
    let mut input = ChipInput::new();

    assert!(input.add_chip("startups").is_ok());
    assert_eq!(input.chips(), ["startups"]);

    // The r/ prefix is stripped before validation
    assert!(input.add_chip("r/SaaS").is_ok());
    assert_eq!(input.chips(), ["startups", "SaaS"]);

    assert_eq!(input.add_chip("a"), Err(ChipError::InvalidName));
    assert_eq!(input.add_chip("has spaces"), Err(ChipError::InvalidName));
    assert_eq!(input.add_chip("emoji🦀"), Err(ChipError::InvalidName));
    assert_eq!(
        input.add_chip("wayyyy_tooooo_long_for_a_subreddit"),
        Err(ChipError::InvalidName)
    );
    assert_eq!(input.add_chip("under_scores_ok").is_ok(), true);
}

#[test]
fn test_duplicates_rejected() {
    let mut input = ChipInput::new();
    input.add_chip("startups").unwrap();
    assert_eq!(
        input.add_chip("startups"),
        Err(ChipError::Duplicate("startups".to_string()))
    );
}

#[test]
fn test_limit_of_five_chips() {
    let mut input = ChipInput::new();
    for name in ["one1", "two2", "three3", "four4", "five5"] {
        input.add_chip(name).unwrap();
    }
    assert!(input.at_limit());
    assert_eq!(input.add_chip("six6"), Err(ChipError::AtLimit));
    assert_eq!(input.chips().len(), 5);
}

#[test]
fn test_typing_and_commit_keys() {
    let mut input = ChipInput::new();
    input.on_focus();
    assert!(input.is_focused());

    type_str(&mut input, "startups");
    assert!(input.chips().is_empty());

    input.handle_key_events(key(KeyCode::Enter));
    assert_eq!(input.chips(), ["startups"]);

    // Comma commits too
    type_str(&mut input, "SaaS");
    input.handle_key_events(key(KeyCode::Char(',')));
    assert_eq!(input.chips(), ["startups", "SaaS"]);

    // Tab commits as well
    type_str(&mut input, "webdev");
    input.handle_key_events(key(KeyCode::Tab));
    assert_eq!(input.chips(), ["startups", "SaaS", "webdev"]);
}

#[test]
fn test_backspace_pops_chip_when_entry_empty() {
    let mut input = ChipInput::new();
    input.on_focus();
    input.add_chip("startups").unwrap();

    type_str(&mut input, "ab");
    input.handle_key_events(key(KeyCode::Backspace));
    input.handle_key_events(key(KeyCode::Backspace));
    // Entry drained, chip still there
    assert_eq!(input.chips(), ["startups"]);

    // Next backspace removes the last chip
    input.handle_key_events(key(KeyCode::Backspace));
    assert!(input.chips().is_empty());
}

#[test]
fn test_blur_commits_pending_value() {
    let mut input = ChipInput::new();
    input.on_focus();
    type_str(&mut input, "startups");

    input.on_blur();
    assert!(!input.is_focused());
    assert_eq!(input.chips(), ["startups"]);
}

#[test]
fn test_escape_blurs_and_commits() {
    let mut input = ChipInput::new();
    input.on_focus();
    type_str(&mut input, "SaaS");
    input.handle_key_events(key(KeyCode::Esc));

    assert!(!input.is_focused());
    assert_eq!(input.chips(), ["SaaS"]);
}

#[test]
fn test_remove_chip_by_name() {
    let mut input = ChipInput::new();
    input.add_chip("startups").unwrap();
    input.add_chip("SaaS").unwrap();
    input.remove_chip("startups");
    assert_eq!(input.chips(), ["SaaS"]);
}
