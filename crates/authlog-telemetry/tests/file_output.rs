//! End-to-end check: an installed logger writes resolved errors as JSON
//! lines with the standard timestamp and structured fields.
//!
//! Lives in its own test binary because the subscriber install is global.

use authlog_errors::{LogError, code, source};
use authlog_telemetry::{TIME_FORMAT, setup_logging_to};

#[test]
fn file_output_carries_fields_and_timestamp() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("auth.log");
    let path_str = path.to_str().expect("utf-8 path");

    setup_logging_to([path_str]).expect("logger install");

    LogError::new(source::JWT, code::TOKEN_EXPIRED)
        .with_sub_code("access")
        .emit();

    let contents = std::fs::read_to_string(&path).expect("log file");
    let line = contents.lines().next().expect("one log line");
    let event: serde_json::Value = serde_json::from_str(line).expect("json event");

    assert_eq!(event["level"], "ERROR");
    assert_eq!(event["fields"]["message"], "JWT is expired");
    assert_eq!(event["fields"]["error_source"], "jwt");
    assert_eq!(event["fields"]["error_code"], "token_expired");
    assert_eq!(event["fields"]["error_sub_code"], "access");

    let timestamp = event["timestamp"].as_str().expect("timestamp field");
    assert!(
        chrono::DateTime::parse_from_str(timestamp, TIME_FORMAT).is_ok(),
        "unexpected timestamp shape: {timestamp}"
    );
}
