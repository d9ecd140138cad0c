use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get all events, newest start date first
    pub async fn get_all(&self) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .order_by_desc(entity::event::Column::StartsAt)
            .all(self.db)
            .await
    }
}
