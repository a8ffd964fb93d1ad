use super::*;
use mustache_validator::PropertyPath;

#[test]
fn test_config_error_display() {
    let error = Error::Config("max_depth must be positive".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: max_depth must be positive"
    );
}

#[test]
fn test_error_debug_format() {
    let error = Error::LoadData("test".to_string());
    let debug_output = format!("{:?}", error);
    assert!(debug_output.contains("LoadData"));
    assert!(debug_output.contains("test"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}

#[test]
fn test_invalid_arguments_error_display() {
    let error = Error::InvalidArguments("no names to check".to_string());
    assert_eq!(error.to_string(), "Invalid arguments: no names to check");
}

#[test]
fn test_load_data_error_display() {
    let error = Error::LoadData("data.json: not found".to_string());
    assert_eq!(error.to_string(), "Failed to load data: data.json: not found");
}

#[test]
fn test_validation_error_is_transparent() {
    let path: PropertyPath = ["a", "b"].into_iter().collect();
    let error = Error::from(mustache_validator::Error::DepthLimitExceeded { path, limit: 1 });
    assert_eq!(
        error.to_string(),
        "Mustache data nested deeper than 1 properties: a > b"
    );
}
