//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger and the global logger.

use crate::log::{self, Logger, LogEntry, LogSeverity, DefaultLogger};
use serial_test::serial;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "texview::Test".to_string(),
        message: format!("{:?} message", severity),
        file,
        line,
    }
}

/// Test logger that captures log entries for verification
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Warn), "Warn");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_creation_with_file_line() {
    let e = entry(LogSeverity::Error, Some("viewer.rs"), Some(42));

    assert_eq!(e.severity, LogSeverity::Error);
    assert_eq!(e.source, "texview::Test");
    assert_eq!(e.file, Some("viewer.rs"));
    assert_eq!(e.line, Some(42));
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;

    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        // Both output branches must not panic
        logger.log(&entry(severity, None, None));
        logger.log(&entry(severity, Some("test.rs"), Some(7)));
    }
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
    assert_send_sync::<CaptureLogger>();
}

// ============================================================================
// GLOBAL LOGGER TESTS
// ============================================================================

#[test]
#[serial]
fn test_global_logger_routes_macros() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(CaptureLogger { entries: entries.clone() });

    crate::viewer_info!("texview::Test", "loaded {} textures", 3);
    crate::viewer_error!("texview::Test", "view creation failed");

    log::reset_logger();

    // Other tests may log concurrently through the global logger
    let entries: Vec<LogEntry> = entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == "texview::Test")
        .cloned()
        .collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].severity, LogSeverity::Info);
    assert_eq!(entries[0].message, "loaded 3 textures");
    assert!(entries[0].file.is_none());
    assert_eq!(entries[1].severity, LogSeverity::Error);
    assert!(entries[1].file.is_some());
    assert!(entries[1].line.is_some());
}

#[test]
#[serial]
fn test_viewer_err_logs_and_builds_backend_error() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(CaptureLogger { entries: entries.clone() });

    let err = crate::viewer_err!("texview::Test", "slot {} unusable", 9);

    log::reset_logger();

    assert!(matches!(err, crate::error::Error::BackendError(ref msg) if msg == "slot 9 unusable"));
    let entries: Vec<LogEntry> = entries.lock().unwrap().iter().filter(|e| e.source == "texview::Test").cloned().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, LogSeverity::Error);
}

#[test]
#[serial]
fn test_viewer_bail_returns_early() {
    fn failing(flag: bool) -> crate::error::Result<u32> {
        if flag {
            crate::viewer_bail!("texview::Test", "bailing out");
        }
        Ok(1)
    }

    assert!(failing(true).is_err());
    assert_eq!(failing(false).unwrap(), 1);
}
