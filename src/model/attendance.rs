use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for the attendance confirmation endpoint
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRequestDto {
    /// ID of the event the badge belongs to
    pub event_id: Option<i32>,
    /// Badge code decoded from the attendee's QR code
    pub badge_code: Option<String>,
}

/// Result of an attendance confirmation attempt.
///
/// `success: false` means no matching registration — a soft outcome, not an
/// error. `already_confirmed` distinguishes a first confirmation from an
/// idempotent replay.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmResponseDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub already_confirmed: Option<bool>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration: Option<ConfirmedRegistrationDto>,
}

/// The registration fields echoed back on a successful confirmation
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmedRegistrationDto {
    pub full_name: String,
    pub registered_at: NaiveDateTime,
    pub confirmed: bool,
}
