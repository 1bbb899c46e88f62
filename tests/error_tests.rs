// SPDX-License-Identifier: MIT

//! Error-to-HTTP mapping tests.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use fittrack::error::AppError;

fn status_of(err: AppError) -> StatusCode {
    err.into_response().status()
}

#[test]
fn test_client_error_statuses() {
    assert_eq!(status_of(AppError::Unauthorized), StatusCode::UNAUTHORIZED);
    assert_eq!(status_of(AppError::InvalidToken), StatusCode::UNAUTHORIZED);
    assert_eq!(
        status_of(AppError::Validation("Please provide date".to_string())),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        status_of(AppError::Conflict("Email already exists".to_string())),
        StatusCode::CONFLICT
    );
    assert_eq!(
        status_of(AppError::NotFound("User abc".to_string())),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn test_server_error_statuses() {
    assert_eq!(
        status_of(AppError::Mail("connection refused".to_string())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        status_of(AppError::Storage("upload failed".to_string())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        status_of(AppError::Database("offline".to_string())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        status_of(AppError::Internal(anyhow::anyhow!("boom"))),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_internal_details_not_leaked() {
    // Database and internal errors must not expose their underlying message
    let msg = AppError::Database("secret connection string".to_string()).to_string();
    assert!(msg.contains("secret connection string"));

    // The display form carries the detail for logs, but the HTTP body is generic.
    let response = AppError::Database("secret connection string".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_not_found_display() {
    let err = AppError::NotFound("User u-1".to_string());
    assert_eq!(err.to_string(), "User u-1 not found");
}
