use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::validation::ValidationError, util::cpf};

/// How a lookup identifies a registration within an event.
///
/// Exactly one identifier is in play per lookup; building this at the
/// boundary removes the "both provided" / "neither provided" states from
/// everything downstream.
pub enum LookupKey {
    /// Digits-only, checksum-validated national ID number.
    ByIdNumber(String),
    /// Exact badge code as decoded from the attendee's QR code.
    ByBadgeCode(String),
}

impl LookupKey {
    /// Normalize a raw ID number to digits and validate its checksum.
    pub fn from_id_number(raw: &str) -> Result<Self, ValidationError> {
        let digits = cpf::normalize(raw);

        if !cpf::validate(&digits) {
            return Err(ValidationError::InvalidIdNumber);
        }

        Ok(Self::ByIdNumber(digits))
    }
}

/// Request body for the registration lookup endpoint
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequestDto {
    /// ID of the event to search within
    pub event_id: Option<i32>,
    /// National ID number, punctuation tolerated
    pub id_number: Option<String>,
    /// Badge code, exact match
    pub badge_code: Option<String>,
}

/// Result of a registration lookup
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LookupResponseDto {
    /// Whether a matching registration exists
    pub found: bool,
    /// User-facing message, naming the attendee when found
    pub message: String,
}

/// Query parameters for the registration listing endpoint
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRegistrationsParams {
    pub event_id: Option<i32>,
}

/// One row of the registration listing
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSummaryDto {
    pub id: i32,
    pub badge_code: Option<String>,
    pub full_name: String,
    pub registered_at: NaiveDateTime,
    pub division: Option<String>,
    pub confirmed: bool,
}
