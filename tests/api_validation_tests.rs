// SPDX-License-Identifier: MIT

//! Request validation tests for the tracking routes.
//!
//! Missing-field checks run before any database access, so the offline mock
//! is sufficient and the expected status is always 400.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

async fn post_json(app: axum::Router, token: &str, uri: &str, body: &str) -> StatusCode {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    response.status()
}

#[tokio::test]
async fn test_add_weight_entry_requires_both_fields() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-1", &state.config.jwt_user_key);

    // Missing weight
    let status = post_json(
        app.clone(),
        &token,
        "/weighttrack/addweightentry",
        r#"{"date": "2026-08-28T10:00:00Z"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Missing date
    let status = post_json(
        app,
        &token,
        "/weighttrack/addweightentry",
        r#"{"weightInKg": 70.5}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_sleep_entry_requires_both_fields() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-1", &state.config.jwt_user_key);

    let status = post_json(
        app,
        &token,
        "/sleeptrack/addsleepentry",
        r#"{"durationInHrs": 7.5}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_workout_entry_requires_all_fields() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-1", &state.config.jwt_user_key);

    // Exercise name present but duration missing
    let status = post_json(
        app,
        &token,
        "/workouttrack/addworkoutentry",
        r#"{"date": "2026-08-28T10:00:00Z", "exercise": "squats"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_calorie_intake_requires_all_fields() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-1", &state.config.jwt_user_key);

    let status = post_json(
        app,
        &token,
        "/calorieintake/addcalorieintake",
        r#"{"item": "rice", "quantity": 100.0}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_by_limit_requires_limit() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-1", &state.config.jwt_user_key);

    let status = post_json(app, &token, "/steptrack/getstepsbylimit", r#"{}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_entry_requires_date() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-1", &state.config.jwt_user_key);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/watertrack/deletewaterentry")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validation_error_uses_envelope() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-1", &state.config.jwt_user_key);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/weighttrack/addweightentry")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["message"], "Please provide date and weight");
}

#[tokio::test]
async fn test_malformed_field_uses_envelope() {
    // A present-but-unparsable field must come back as a 400 inside the
    // {ok, message} envelope, not as a bare-text body.
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-1", &state.config.jwt_user_key);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/weighttrack/addweightentry")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"date": "not-a-date", "weightInKg": 70.0}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body)
        .expect("client errors must keep the JSON envelope");
    assert_eq!(json["ok"], false);
    assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn test_missing_body_uses_envelope() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-1", &state.config.jwt_user_key);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/sleeptrack/getsleepbylimit")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["ok"], false);
}

#[tokio::test]
async fn test_register_rejects_malformed_email() {
    let (app, _) = common::create_test_app();

    let body = serde_json::json!({
        "name": "Test User",
        "email": "not-an-email",
        "password": "hunter2",
        "weightInKg": 70.0,
        "heightInCm": 175.0,
        "gender": "male",
        "dob": "1994-05-01",
        "goal": "maintain",
        "activityLevel": "moderate"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_send_otp_requires_email() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/sendotp")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"email": ""}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
