use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response shape used by the registration listing endpoint for input
/// errors; kept distinct from [`ErrorDto`] because clients match on the key.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// The user-facing message
    pub message: String,
}
