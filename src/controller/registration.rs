use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    error::{validation::ValidationError, Error},
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        registration::{
            ListRegistrationsParams, LookupKey, LookupRequestDto, LookupResponseDto,
            RegistrationSummaryDto,
        },
    },
    service::registration::RegistrationService,
    util::net::client_key,
};

pub static REGISTRATION_TAG: &str = "registration";

/// Look up whether a registration exists for an event
///
/// Identifies the registration either by national ID number (validated and
/// normalized before the query) or by badge code. When both are supplied the
/// ID number wins. Only the attendee's name is disclosed; a miss is reported
/// through the `found` flag, not an error status.
///
/// # Responses
/// - 200 (OK): Lookup executed; `found` reports the result
/// - 400 (Bad Request): Missing event ID, missing identifier, or an ID number
///   that fails checksum validation
/// - 429 (Too Many Requests): The client key spent its lookup budget
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    post,
    path = "/api/registrations/lookup",
    tag = REGISTRATION_TAG,
    request_body = LookupRequestDto,
    responses(
        (status = 200, description = "Lookup executed, found flag reports the result", body = LookupResponseDto),
        (status = 400, description = "Missing or invalid lookup input", body = ErrorDto),
        (status = 429, description = "Too many lookups from this client", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_registration(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LookupRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let client = client_key(&headers);
    if !state.lookup_limiter.allow(&client, Utc::now()) {
        return Err(Error::RateLimited(client));
    }

    let event_id = payload.event_id.ok_or(ValidationError::MissingEventId)?;

    // Empty identifiers count as absent
    let id_number = payload.id_number.filter(|value| !value.is_empty());
    let badge_code = payload.badge_code.filter(|value| !value.is_empty());

    let key = match (id_number, badge_code) {
        (Some(id_number), _) => LookupKey::from_id_number(&id_number)?,
        (None, Some(badge_code)) => LookupKey::ByBadgeCode(badge_code),
        (None, None) => return Err(ValidationError::MissingLookupKey.into()),
    };

    let registration_service = RegistrationService::new(&state.db);

    let response = match registration_service.lookup(event_id, &key).await? {
        Some(name) => LookupResponseDto {
            found: true,
            message: format!("Registration found for: {}", name),
        },
        None => LookupResponseDto {
            found: false,
            message: "No registration found for this event.".to_string(),
        },
    };

    Ok((StatusCode::OK, Json(response)))
}

/// List an event's registrations
///
/// Returns summary rows sorted by attendee name ascending.
///
/// # Responses
/// - 200 (OK): The event's registrations
/// - 400 (Bad Request): The `eventId` query parameter is missing
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    get,
    path = "/api/registrations",
    tag = REGISTRATION_TAG,
    params(
        ("eventId" = Option<i32>, Query, description = "ID of the event to list registrations for")
    ),
    responses(
        (status = 200, description = "Registrations for the event, name order", body = Vec<RegistrationSummaryDto>),
        (status = 400, description = "Missing eventId query parameter", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_registrations(
    State(state): State<AppState>,
    Query(params): Query<ListRegistrationsParams>,
) -> Result<impl IntoResponse, Error> {
    let event_id = params
        .event_id
        .ok_or(ValidationError::MissingEventIdFilter)?;

    let registration_service = RegistrationService::new(&state.db);

    let registrations = registration_service.list(event_id).await?;

    Ok((StatusCode::OK, Json(registrations)))
}
