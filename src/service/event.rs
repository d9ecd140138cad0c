use sea_orm::DatabaseConnection;

use crate::{data::event::EventRepository, error::Error, model::event::EventDto};

/// Service for the event listing.
pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new instance of [`EventService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all events, newest start date first.
    pub async fn list(&self) -> Result<Vec<EventDto>, Error> {
        let event_repository = EventRepository::new(self.db);

        let events = event_repository.get_all().await?;

        let dtos = events
            .into_iter()
            .map(|e| EventDto {
                id: e.id,
                title: e.title,
                starts_at: e.starts_at,
                ends_at: e.ends_at,
                state: e.state,
                municipality: e.municipality,
                created_at: e.created_at,
            })
            .collect();

        Ok(dtos)
    }
}
