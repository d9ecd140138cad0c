//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `POST /api/registrations/lookup` - Look up a registration by ID number
///   or badge code
/// - `GET /api/registrations` - List an event's registrations
/// - `POST /api/attendance/confirm` - Mark a registration as attended
/// - `GET /api/events` - List all events
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and
/// Swagger UI at `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be given
/// state and served.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Frontdesk", description = "Frontdesk check-in API"), tags(
        (name = controller::registration::REGISTRATION_TAG, description = "Registration lookup and listing routes"),
        (name = controller::attendance::ATTENDANCE_TAG, description = "Attendance confirmation routes"),
        (name = controller::event::EVENT_TAG, description = "Event listing routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::registration::lookup_registration))
        .routes(routes!(controller::registration::list_registrations))
        .routes(routes!(controller::attendance::confirm_attendance))
        .routes(routes!(controller::event::list_events))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
