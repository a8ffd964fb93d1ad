use super::*;
use std::error::Error as _;

fn path_of(segments: &[&str]) -> PropertyPath {
    segments
        .iter()
        .fold(PropertyPath::root(), |path, segment| path.child(segment))
}

#[test]
fn test_error_debug_format() {
    let error = Error::MissingProperty {
        path: path_of(&["subject", "name"]),
    };
    let debug_output = format!("{error:?}");
    assert!(debug_output.contains("MissingProperty"));
    assert!(debug_output.contains("subject"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}

#[test]
fn test_missing_property_error_display() {
    let error = Error::MissingProperty {
        path: path_of(&["a", "b", "c"]),
    };
    assert_eq!(error.to_string(), "Missing Mustache data property: a > b > c");
}

#[test]
fn test_missing_property_error_display_single_segment() {
    let error = Error::MissingProperty {
        path: path_of(&["cannot"]),
    };
    assert_eq!(error.to_string(), "Missing Mustache data property: cannot");
}

#[test]
fn test_depth_limit_exceeded_error_display() {
    let error = Error::DepthLimitExceeded {
        path: path_of(&["a", "a", "a"]),
        limit: 2,
    };
    assert_eq!(
        error.to_string(),
        "Mustache data nested deeper than 2 properties: a > a > a"
    );
}

#[test]
fn test_handler_error_displays_handler_message() {
    let error = Error::Handler {
        path: path_of(&["subject", "name"]),
        source: "Custom error: subject.name".into(),
    };
    assert_eq!(error.to_string(), "Custom error: subject.name");
    assert!(error.source().is_some());
}

#[test]
fn test_error_path_accessor() {
    let error = Error::DepthLimitExceeded {
        path: path_of(&["x", "y"]),
        limit: 1,
    };
    assert_eq!(error.path().segments(), vec!["x", "y"]);
}
