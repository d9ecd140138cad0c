//! HTTP controller endpoints for the Frontdesk check-in API.
//!
//! This module contains the Axum handlers for registration lookup and
//! listing, attendance confirmation, and the event listing. Controllers apply
//! rate limiting, validate inputs, delegate to services, and return JSON
//! responses. Each endpoint is annotated with utoipa for OpenAPI
//! documentation.

pub mod attendance;
pub mod event;
pub mod registration;
