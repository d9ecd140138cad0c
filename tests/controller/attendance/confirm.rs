//! Tests for the attendance confirmation endpoint.
//!
//! Verifies the one-way confirmation transition, idempotent replay, the soft
//! not-found result, boundary validation failures, and the per-client rate
//! limit.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use frontdesk::{
    controller::attendance::confirm_attendance,
    limiter::{RateLimitConfig, RateLimiter},
    model::{
        api::ErrorDto,
        app::AppState,
        attendance::{ConfirmRequestDto, ConfirmResponseDto},
    },
};
use frontdesk_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::controller::read_json;

fn confirm_payload(event_id: Option<i32>, badge_code: Option<&str>) -> ConfirmRequestDto {
    ConfirmRequestDto {
        event_id,
        badge_code: badge_code.map(str::to_string),
    }
}

/// Confirming then replaying reports the transition exactly once and the flag
/// stays set
#[tokio::test]
async fn confirm_then_replay() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let event = fixtures::event::insert_event(&test.db, "Data Privacy Seminar", None).await?;

    let registration = fixtures::registration::insert_registration(
        &test.db,
        event.id,
        constant::TEST_FULL_NAME,
        constant::VALID_ID_NUMBER,
        Some(constant::TEST_BADGE_CODE),
    )
    .await?;

    let state: AppState = test.state();

    let response = confirm_attendance(
        State(state.clone()),
        HeaderMap::new(),
        Json(confirm_payload(
            Some(event.id),
            Some(constant::TEST_BADGE_CODE),
        )),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let body: ConfirmResponseDto = read_json(response).await;
    assert!(body.success);
    assert_eq!(body.already_confirmed, Some(false));
    assert!(body.message.contains(constant::TEST_FULL_NAME));
    assert!(body.registration.unwrap().confirmed);

    let response = confirm_attendance(
        State(state),
        HeaderMap::new(),
        Json(confirm_payload(
            Some(event.id),
            Some(constant::TEST_BADGE_CODE),
        )),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let body: ConfirmResponseDto = read_json(response).await;
    assert!(body.success);
    assert_eq!(body.already_confirmed, Some(true));
    assert!(body.message.contains(constant::TEST_FULL_NAME));

    // The store must hold the confirmed flag after both calls
    let stored = entity::prelude::Registration::find_by_id(registration.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(stored.confirmed);

    Ok(())
}

/// An unknown badge code is a soft failure with success=false
#[tokio::test]
async fn unknown_badge_code_is_soft_failure() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let event = fixtures::event::insert_event(&test.db, "Data Privacy Seminar", None).await?;

    let response = confirm_attendance(
        State(test.state()),
        HeaderMap::new(),
        Json(confirm_payload(Some(event.id), Some("NOPE"))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let body: ConfirmResponseDto = read_json(response).await;
    assert!(!body.success);
    assert_eq!(body.message, "No registration found for this event.");
    assert!(body.registration.is_none());

    Ok(())
}

/// Missing event ID is a 400, never a 500
#[tokio::test]
async fn missing_event_id_is_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let response = confirm_attendance(
        State(test.state()),
        HeaderMap::new(),
        Json(confirm_payload(None, Some(constant::TEST_BADGE_CODE))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = read_json(response).await;
    assert_eq!(body.error, "Event ID is required.");

    Ok(())
}

/// Missing badge code is a 400
#[tokio::test]
async fn missing_badge_code_is_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let event = fixtures::event::insert_event(&test.db, "Data Privacy Seminar", None).await?;

    let response = confirm_attendance(
        State(test.state()),
        HeaderMap::new(),
        Json(confirm_payload(Some(event.id), None)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = read_json(response).await;
    assert_eq!(body.error, "Badge code is required.");

    Ok(())
}

/// Requests past the confirmation budget answer 429
#[tokio::test]
async fn rate_limit_rejects_excess_confirmations() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let event = fixtures::event::insert_event(&test.db, "Data Privacy Seminar", None).await?;

    let state = AppState {
        db: test.db.clone(),
        lookup_limiter: Arc::new(RateLimiter::new(RateLimitConfig::lookup_default())),
        attendance_limiter: Arc::new(RateLimiter::new(RateLimitConfig {
            max_requests: 1,
            window_millis: 60_000,
        })),
    };

    let response = confirm_attendance(
        State(state.clone()),
        HeaderMap::new(),
        Json(confirm_payload(Some(event.id), Some("NOPE"))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let response = confirm_attendance(
        State(state),
        HeaderMap::new(),
        Json(confirm_payload(Some(event.id), Some("NOPE"))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    Ok(())
}

/// Clients with distinct forwarded addresses spend separate budgets
#[tokio::test]
async fn rate_limit_buckets_by_forwarded_address() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let event = fixtures::event::insert_event(&test.db, "Data Privacy Seminar", None).await?;

    let state = AppState {
        db: test.db.clone(),
        lookup_limiter: Arc::new(RateLimiter::new(RateLimitConfig::lookup_default())),
        attendance_limiter: Arc::new(RateLimiter::new(RateLimitConfig {
            max_requests: 1,
            window_millis: 60_000,
        })),
    };

    let mut first_client = HeaderMap::new();
    first_client.insert("x-forwarded-for", "203.0.113.9".parse().unwrap());

    let mut second_client = HeaderMap::new();
    second_client.insert("x-forwarded-for", "203.0.113.10".parse().unwrap());

    let response = confirm_attendance(
        State(state.clone()),
        first_client.clone(),
        Json(confirm_payload(Some(event.id), Some("NOPE"))),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let response = confirm_attendance(
        State(state.clone()),
        first_client,
        Json(confirm_payload(Some(event.id), Some("NOPE"))),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // A different client is still within budget
    let response = confirm_attendance(
        State(state),
        second_client,
        Json(confirm_payload(Some(event.id), Some("NOPE"))),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}
