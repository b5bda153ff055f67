use redditpains::prefs::PreferenceStore;
use std::path::PathBuf;

fn temp_store(name: &str) -> PreferenceStore {
    let path = std::env::temp_dir().join(format!("redditpains_prefs_{}_{}.json", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    PreferenceStore::at_path(path)
}

#[test]
fn test_missing_file_reads_none() {
    let store = temp_store("missing");
    assert_eq!(store.read("theme"), None);
}

#[test]
fn test_write_then_read_round_trips() {
    let store = temp_store("roundtrip");
    store.write("ui.sidebar.width", "224");
    store.write("theme", "dark");

    assert_eq!(store.read("ui.sidebar.width"), Some("224".to_string()));
    assert_eq!(store.read("theme"), Some("dark".to_string()));
    assert_eq!(store.read("ui.sidebar.compact"), None);
}

#[test]
fn test_write_overwrites_existing_key() {
    let store = temp_store("overwrite");
    store.write("theme", "dark");
    store.write("theme", "light");
    assert_eq!(store.read("theme"), Some("light".to_string()));
}

#[test]
fn test_unparsable_file_reads_none_and_recovers_on_write() {
    let path = std::env::temp_dir().join(format!("redditpains_prefs_garbage_{}.json", std::process::id()));
    std::fs::write(&path, "not json at all {{{").unwrap();
    let store = PreferenceStore::at_path(path.clone());

    // Garbage degrades to "no stored value", never an error
    assert_eq!(store.read("theme"), None);

    // The next write starts over from an empty map
    store.write("theme", "system");
    assert_eq!(store.read("theme"), Some("system".to_string()));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_unwritable_path_is_silently_skipped() {
    // A directory that cannot be created under a file path
    let base = std::env::temp_dir().join(format!("redditpains_prefs_blocker_{}", std::process::id()));
    std::fs::write(&base, "plain file").unwrap();
    let store = PreferenceStore::at_path(PathBuf::from(&base).join("nested").join("prefs.json"));

    // Must not panic, must not error outward
    store.write("theme", "dark");
    assert_eq!(store.read("theme"), None);

    let _ = std::fs::remove_file(&base);
}
