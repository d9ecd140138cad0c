//! Error types for the Frontdesk server application.
//!
//! This module provides the error handling system for the check-in API, with
//! specialized error types per domain (configuration, request validation).
//! All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for ergonomic error definitions. Not-found outcomes are NOT
//! errors here: lookups and confirmations report them as soft results so
//! clients can tell "no match" apart from "the request broke".

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{config::ConfigError, validation::ValidationError},
    model::api::ErrorDto,
};

/// Main error type for the Frontdesk server application.
///
/// Aggregates the domain-specific error types and external library errors
/// into a single unified error type, using `thiserror`'s `#[from]` attribute
/// so handlers can propagate with `?`. The `IntoResponse` implementation maps
/// errors to HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Validation errors (missing or malformed request input)
/// - Rate limiting (a client key spent its request budget)
/// - Database errors (query failures, connection issues)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request validation error (missing or malformed input).
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A client key exceeded its request budget for an endpoint.
    #[error("Client {0:?} exceeded its request budget")]
    RateLimited(String),
    /// Internal error indicating a bug in Frontdesk's code.
    #[error("Internal error with Frontdesk's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation failures, with a user-facing message
/// - 429 Too Many Requests - For rate-limited clients
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::RateLimited(client_key) => {
                tracing::debug!(client_key = %client_key, "Rate limited");

                (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(ErrorDto {
                        error: "Too many requests, please try again later.".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging but returns a generic message to
/// the client so no internal detail leaks. Used as the fallback for errors
/// without a specific HTTP response mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
