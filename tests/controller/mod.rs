//! Controller-level integration tests.
//!
//! Handlers are called directly with their extractors, the way the routes
//! invoke them, and responses are decoded from their JSON bodies.

mod attendance;
mod event;
mod registration;

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;

/// Decode a response body as JSON.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to decode response body")
}
