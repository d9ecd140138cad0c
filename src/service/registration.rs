use sea_orm::DatabaseConnection;

use crate::{
    data::registration::RegistrationRepository,
    error::Error,
    model::registration::{LookupKey, RegistrationSummaryDto},
};

/// Service for querying registrations on behalf of the lookup and listing
/// endpoints.
pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new instance of [`RegistrationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Look up a registration within an event.
    ///
    /// Returns only the attendee's display name; no other registration fields
    /// leave this service through the lookup path.
    pub async fn lookup(&self, event_id: i32, key: &LookupKey) -> Result<Option<String>, Error> {
        let registration_repository = RegistrationRepository::new(self.db);

        let registration = match key {
            LookupKey::ByIdNumber(id_number) => {
                registration_repository
                    .find_by_id_number(event_id, id_number)
                    .await?
            }
            LookupKey::ByBadgeCode(badge_code) => {
                registration_repository
                    .find_by_badge_code(event_id, badge_code)
                    .await?
            }
        };

        Ok(registration.map(|r| r.full_name))
    }

    /// List an event's registrations as summary rows, name order.
    pub async fn list(&self, event_id: i32) -> Result<Vec<RegistrationSummaryDto>, Error> {
        let registration_repository = RegistrationRepository::new(self.db);

        let registrations = registration_repository
            .get_many_by_event_id(event_id)
            .await?;

        let summaries = registrations
            .into_iter()
            .map(|r| RegistrationSummaryDto {
                id: r.id,
                badge_code: r.badge_code,
                full_name: r.full_name,
                registered_at: r.registered_at,
                division: r.division,
                confirmed: r.confirmed,
            })
            .collect();

        Ok(summaries)
    }
}
