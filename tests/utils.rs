use redditpains::utils::datetime::parse_run_date;
use redditpains::utils::text::{truncate, wrap_text};

#[test]
fn test_wrap_text_respects_width() {
    let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(line.chars().count() <= 10, "line too long: {line:?}");
    }
    // No words lost
    assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
}

#[test]
fn test_wrap_text_splits_oversized_words() {
    let lines = wrap_text("https://reddit.com/r/startups/comments/example1", 16);
    for line in &lines {
        assert!(line.chars().count() <= 16);
    }
}

#[test]
fn test_wrap_text_edge_cases() {
    assert_eq!(wrap_text("", 10), vec![String::new()]);
    assert_eq!(wrap_text("hello", 0), vec![String::new()]);
    assert_eq!(wrap_text("hello", 10), vec!["hello".to_string()]);
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly10!", 10), "exactly10!");
    let cut = truncate("something far too long", 10);
    assert_eq!(cut.chars().count(), 10);
    assert!(cut.ends_with('…'));
}

#[test]
fn test_parse_run_date() {
    let feb = parse_run_date("Feb 2026").unwrap();
    let jan = parse_run_date("Jan 2026").unwrap();
    let dec = parse_run_date("Dec 2025").unwrap();
    assert!(feb > jan);
    assert!(jan > dec);

    assert!(parse_run_date("not a date").is_none());
    assert!(parse_run_date("").is_none());
}
