//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};
use crate::import::{ImportError, ImportErrorKind};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("createView failed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("createView failed"));
}

#[test]
fn test_out_of_memory_display() {
    let err = Error::OutOfMemory;
    assert_eq!(format!("{}", err), "Out of GPU memory");
}

#[test]
fn test_slot_exhausted_display() {
    let err = Error::SlotExhausted;
    assert_eq!(format!("{}", err), "Descriptor slots exhausted");
}

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("descriptor range 1..2048 exceeds capacity 1024".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Initialization failed"));
    assert!(display.contains("capacity 1024"));
}

#[test]
fn test_import_error_display_contains_kind_and_message() {
    let err = Error::Import(ImportError::new(ImportErrorKind::InvalidData, "truncated header"));
    let display = format!("{}", err);
    assert!(display.contains("Import error"));
    assert!(display.contains("InvalidData"));
    assert!(display.contains("truncated header"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::SlotExhausted;
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug = format!("{:?}", Error::InvalidResource("resource".to_string()));
    assert!(debug.contains("InvalidResource"));

    let debug = format!("{:?}", Error::SlotExhausted);
    assert!(debug.contains("SlotExhausted"));
}

#[test]
fn test_error_from_import_error() {
    let err: Error = ImportError::new(ImportErrorKind::FileNotFound, "missing.dds").into();
    match err {
        Error::Import(inner) => {
            assert_eq!(inner.kind, ImportErrorKind::FileNotFound);
            assert_eq!(inner.message, "missing.dds");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

// ============================================================================
// ERROR PROPAGATION TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<u32> {
        Err(Error::SlotExhausted)
    }

    fn outer() -> Result<u32> {
        let slot = inner()?;
        Ok(slot + 1)
    }

    assert!(matches!(outer(), Err(Error::SlotExhausted)));
}
