use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    error::{validation::ValidationError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        attendance::{ConfirmRequestDto, ConfirmResponseDto, ConfirmedRegistrationDto},
    },
    service::attendance::{AttendanceService, ConfirmOutcome},
    util::net::client_key,
};

pub static ATTENDANCE_TAG: &str = "attendance";

/// Confirm an attendee's presence at an event
///
/// Marks the registration matching the event and badge code as attended. The
/// transition is one-way and idempotent: replaying a confirmation succeeds
/// and reports `alreadyConfirmed` instead of failing. An unknown badge code
/// is a soft failure carried in the `success` flag.
///
/// # Responses
/// - 200 (OK): Confirmation processed; `success`/`alreadyConfirmed` report
///   the outcome
/// - 400 (Bad Request): Missing event ID or badge code
/// - 429 (Too Many Requests): The client key spent its confirmation budget
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    post,
    path = "/api/attendance/confirm",
    tag = ATTENDANCE_TAG,
    request_body = ConfirmRequestDto,
    responses(
        (status = 200, description = "Confirmation processed, flags report the outcome", body = ConfirmResponseDto),
        (status = 400, description = "Missing event ID or badge code", body = ErrorDto),
        (status = 429, description = "Too many confirmations from this client", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ConfirmRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let client = client_key(&headers);
    if !state.attendance_limiter.allow(&client, Utc::now()) {
        return Err(Error::RateLimited(client));
    }

    let event_id = payload.event_id.ok_or(ValidationError::MissingEventId)?;
    let badge_code = payload
        .badge_code
        .filter(|value| !value.is_empty())
        .ok_or(ValidationError::MissingBadgeCode)?;

    let attendance_service = AttendanceService::new(&state.db);

    let response = match attendance_service.confirm(event_id, &badge_code).await? {
        ConfirmOutcome::NotFound => ConfirmResponseDto {
            success: false,
            already_confirmed: None,
            message: "No registration found for this event.".to_string(),
            registration: None,
        },
        ConfirmOutcome::AlreadyConfirmed(registration) => ConfirmResponseDto {
            success: true,
            already_confirmed: Some(true),
            message: format!(
                "Attendance already confirmed for: {}",
                registration.full_name
            ),
            registration: Some(ConfirmedRegistrationDto {
                full_name: registration.full_name,
                registered_at: registration.registered_at,
                confirmed: registration.confirmed,
            }),
        },
        ConfirmOutcome::Confirmed(registration) => ConfirmResponseDto {
            success: true,
            already_confirmed: Some(false),
            message: format!("Attendance confirmed for: {}", registration.full_name),
            registration: Some(ConfirmedRegistrationDto {
                full_name: registration.full_name,
                registered_at: registration.registered_at,
                confirmed: registration.confirmed,
            }),
        },
    };

    Ok((StatusCode::OK, Json(response)))
}
