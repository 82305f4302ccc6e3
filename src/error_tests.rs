//! Tests for SuggestError type

use super::*;

#[test]
fn test_invalid_config_error_display() {
    let error = SuggestError::InvalidConfig("result_limit must be positive".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid configuration"));
    assert!(msg.contains("result_limit must be positive"));
}

#[test]
fn test_io_error_display() {
    let error = SuggestError::Io("file not found".to_string());
    let msg = error.to_string();
    assert!(msg.contains("IO error"));
    assert!(msg.contains("file not found"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = SuggestError::from(io_err);
    assert!(matches!(err, SuggestError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_equality() {
    let err1 = SuggestError::Io("test".to_string());
    let err2 = SuggestError::Io("test".to_string());
    let err3 = SuggestError::Io("different".to_string());

    assert_eq!(err1, err2);
    assert_ne!(err1, err3);
}

#[test]
fn test_all_error_variants_are_cloneable() {
    let errors: Vec<SuggestError> = vec![
        SuggestError::InvalidConfig("test".to_string()),
        SuggestError::Io("test".to_string()),
    ];

    for error in errors {
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
