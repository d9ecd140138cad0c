use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{api::ErrorDto, app::AppState, event::EventDto},
    service::event::EventService,
};

pub static EVENT_TAG: &str = "event";

/// List all events
///
/// Returns every event, newest start date first, for the organizer's event
/// picker.
///
/// # Responses
/// - 200 (OK): All events
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "All events, newest start date first", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let event_service = EventService::new(&state.db);

    let events = event_service.list().await?;

    Ok((StatusCode::OK, Json(events)))
}
