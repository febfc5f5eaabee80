use crate::ClientError;

use pm_board::RemoteError;

use googletest::prelude::*;

#[test]
fn given_api_error_when_converted_then_rejection_keeps_status_and_code() {
    // Given
    let error = ClientError::api_error(404, "NOT_FOUND", "Task not found", None);

    // When
    let remote = RemoteError::from(error);

    // Then
    match remote {
        RemoteError::Rejected {
            status,
            code,
            message,
            ..
        } => {
            assert_that!(status, eq(404));
            assert_that!(code.as_str(), eq("NOT_FOUND"));
            assert_that!(message.as_str(), eq("Task not found"));
        }
        other => panic!("Expected Rejected, got {:?}", other),
    }
}

#[test]
fn given_json_error_when_converted_then_invalid_response() {
    // Given
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = ClientError::from(json_error);

    // When
    let remote = RemoteError::from(error);

    // Then
    assert!(matches!(remote, RemoteError::InvalidResponse { .. }));
}

#[test]
fn given_api_error_when_displayed_then_code_included() {
    let error = ClientError::api_error(
        400,
        "VALIDATION_ERROR",
        "title is required",
        Some("title".to_string()),
    );

    assert_that!(error.code(), some(eq("VALIDATION_ERROR")));
    assert_that!(error.to_string(), contains_substring("VALIDATION_ERROR"));
}
