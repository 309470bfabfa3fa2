use repscount::logger::Logger;

#[test]
fn test_logger_records_messages() {
    let logger = Logger::new();
    assert!(logger.is_empty());

    logger.log("first".to_string());
    logger.log("second".to_string());

    assert_eq!(logger.len(), 2);
    let logs = logger.get_logs();
    assert!(logs[0].contains("second"), "newest entries come first");
    assert!(logs[1].contains("first"));
}

#[test]
fn test_logger_clear() {
    let logger = Logger::new();
    logger.log("entry".to_string());
    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_logger_clones_share_entries() {
    let logger = Logger::new();
    let clone = logger.clone();

    clone.log("shared".to_string());

    assert_eq!(logger.len(), 1);
    assert!(logger.get_logs()[0].contains("shared"));
}
