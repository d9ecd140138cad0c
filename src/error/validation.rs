use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, MessageDto};

/// Request input rejected at the boundary, before any store access.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Event ID is missing from the request payload")]
    MissingEventId,
    #[error("Event ID query parameter is missing from the listing request")]
    MissingEventIdFilter,
    #[error("Neither an ID number nor a badge code was provided for lookup")]
    MissingLookupKey,
    #[error("ID number failed checksum validation")]
    InvalidIdNumber,
    #[error("Badge code is missing from the confirmation payload")]
    MissingBadgeCode,
}

impl ValidationError {
    fn bad_request(message: &str) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// Maps each validation failure to a 400 with its user-facing message.
///
/// The registration listing endpoint historically answers a missing filter
/// with a `message` body rather than `error`; clients depend on that shape.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingEventId => Self::bad_request("Event ID is required."),
            Self::MissingEventIdFilter => (
                StatusCode::BAD_REQUEST,
                Json(MessageDto {
                    message: "Please provide an eventId.".to_string(),
                }),
            )
                .into_response(),
            Self::MissingLookupKey => Self::bad_request("ID number or badge code is required."),
            Self::InvalidIdNumber => Self::bad_request("Invalid ID number."),
            Self::MissingBadgeCode => Self::bad_request("Badge code is required."),
        }
    }
}
