//! Tests for the registration listing endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use frontdesk::{
    controller::registration::list_registrations,
    model::{
        api::MessageDto,
        registration::{ListRegistrationsParams, RegistrationSummaryDto},
    },
};
use frontdesk_test_utils::prelude::*;

use crate::controller::read_json;

/// Summaries come back sorted by attendee name ascending
#[tokio::test]
async fn lists_registrations_in_name_order() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let event = fixtures::event::insert_event(&test.db, "Data Privacy Seminar", None).await?;

    fixtures::registration::insert_registration(
        &test.db,
        event.id,
        "Carla Dias",
        constant::VALID_ID_NUMBER_ALT,
        Some("CD34"),
    )
    .await?;
    fixtures::registration::insert_registration(
        &test.db,
        event.id,
        "Ana Souza",
        constant::VALID_ID_NUMBER,
        Some(constant::TEST_BADGE_CODE),
    )
    .await?;

    let response = list_registrations(
        State(test.state()),
        Query(ListRegistrationsParams {
            event_id: Some(event.id),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Vec<RegistrationSummaryDto> = read_json(response).await;
    let names: Vec<&str> = body.iter().map(|r| r.full_name.as_str()).collect();
    assert_eq!(names, vec!["Ana Souza", "Carla Dias"]);

    Ok(())
}

/// An event without registrations lists as an empty array
#[tokio::test]
async fn empty_event_lists_no_registrations() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let event = fixtures::event::insert_event(&test.db, "Data Privacy Seminar", None).await?;

    let response = list_registrations(
        State(test.state()),
        Query(ListRegistrationsParams {
            event_id: Some(event.id),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Vec<RegistrationSummaryDto> = read_json(response).await;
    assert!(body.is_empty());

    Ok(())
}

/// A missing eventId filter is a 400 with the endpoint's message shape
#[tokio::test]
async fn missing_event_id_is_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let response = list_registrations(
        State(test.state()),
        Query(ListRegistrationsParams { event_id: None }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: MessageDto = read_json(response).await;
    assert_eq!(body.message, "Please provide an eventId.");

    Ok(())
}
