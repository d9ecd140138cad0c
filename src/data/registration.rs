use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct RegistrationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationRepository<'a> {
    /// Creates a new instance of [`RegistrationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find a registration within an event by its digits-only ID number
    ///
    /// Callers normalize the number before querying; values are stored
    /// digits-only so the comparison is exact.
    pub async fn find_by_id_number(
        &self,
        event_id: i32,
        id_number: &str,
    ) -> Result<Option<entity::registration::Model>, DbErr> {
        entity::prelude::Registration::find()
            .filter(entity::registration::Column::EventId.eq(event_id))
            .filter(entity::registration::Column::IdNumber.eq(id_number))
            .one(self.db)
            .await
    }

    /// Find a registration within an event by exact badge code
    pub async fn find_by_badge_code(
        &self,
        event_id: i32,
        badge_code: &str,
    ) -> Result<Option<entity::registration::Model>, DbErr> {
        entity::prelude::Registration::find()
            .filter(entity::registration::Column::EventId.eq(event_id))
            .filter(entity::registration::Column::BadgeCode.eq(badge_code))
            .one(self.db)
            .await
    }

    /// Get all registrations for an event ordered by attendee name
    pub async fn get_many_by_event_id(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::registration::Model>, DbErr> {
        entity::prelude::Registration::find()
            .filter(entity::registration::Column::EventId.eq(event_id))
            .order_by_asc(entity::registration::Column::FullName)
            .all(self.db)
            .await
    }

    /// Mark a registration as attended if it is not already.
    ///
    /// Runs as a single conditional update so the check-and-set cannot race:
    /// the returned row count is 1 when this call performed the
    /// unconfirmed-to-confirmed transition and 0 when the registration was
    /// already confirmed.
    pub async fn confirm(&self, registration_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Registration::update_many()
            .col_expr(entity::registration::Column::Confirmed, Expr::value(true))
            .filter(entity::registration::Column::Id.eq(registration_id))
            .filter(entity::registration::Column::Confirmed.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
