use redditpains::logger::Logger;

#[test]
fn test_logging_disabled_keeps_memory_only() {
    let logger = Logger::from_config(false).unwrap();
    assert!(!logger.is_enabled());
    assert!(!logger.has_file_writer());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert!(logs[0].contains("second"));
    assert!(logs[1].contains("first"));
}

#[test]
fn test_clear_empties_log_buffer() {
    let logger = Logger::new();
    logger.log("entry".to_string());
    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_logger_is_shared_across_clones() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from the clone".to_string());
    assert_eq!(logger.get_logs().len(), 1);
}

#[test]
fn test_logging_enabled_opens_file_writer() {
    // Environments without a data dir can't run this one
    let Ok(logger) = Logger::from_config(true) else {
        return;
    };
    assert!(logger.is_enabled());
    assert!(logger.has_file_writer());

    logger.log("Test message with file".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message with file"));
}
