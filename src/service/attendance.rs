use sea_orm::DatabaseConnection;

use crate::{data::registration::RegistrationRepository, error::Error, model::db::RegistrationModel};

/// Result of a confirmation attempt for one badge code.
pub enum ConfirmOutcome {
    /// No registration matches the event and badge code; a soft failure.
    NotFound,
    /// The registration was already confirmed; replaying is not an error.
    AlreadyConfirmed(RegistrationModel),
    /// This call performed the unconfirmed-to-confirmed transition.
    Confirmed(RegistrationModel),
}

/// Service for marking registrations as attended.
pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    /// Creates a new instance of [`AttendanceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Mark the registration identified by `(event_id, badge_code)` as attended.
    ///
    /// The confirmed flag only ever moves from false to true. The transition
    /// runs as one conditional update in the store, so two requests racing on
    /// the same badge code cannot both observe the first-confirmation outcome;
    /// the loser is reported [`ConfirmOutcome::AlreadyConfirmed`].
    pub async fn confirm(&self, event_id: i32, badge_code: &str) -> Result<ConfirmOutcome, Error> {
        let registration_repository = RegistrationRepository::new(self.db);

        let registration = match registration_repository
            .find_by_badge_code(event_id, badge_code)
            .await?
        {
            Some(registration) => registration,
            None => return Ok(ConfirmOutcome::NotFound),
        };

        let rows_affected = registration_repository.confirm(registration.id).await?;

        if rows_affected == 0 {
            return Ok(ConfirmOutcome::AlreadyConfirmed(registration));
        }

        Ok(ConfirmOutcome::Confirmed(RegistrationModel {
            confirmed: true,
            ..registration
        }))
    }
}
