use axum::http::HeaderMap;

/// Bucket for requests whose forwarded address is missing or unreadable.
pub static UNKNOWN_CLIENT_KEY: &str = "unknown";

/// Derive the rate-limiting key for a request from its forwarded address.
///
/// Takes the first comma-separated entry of `x-forwarded-for`, trimmed.
/// Requests without the header collapse into the shared "unknown" bucket,
/// which means clients behind a proxy that strips the header throttle each
/// other; see the limiter module notes.
pub fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_CLIENT_KEY.to_string())
}
