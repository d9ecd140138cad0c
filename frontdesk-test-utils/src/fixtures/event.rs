use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Insert an event with standard test values.
///
/// # Arguments
/// - `title` - Event title
/// - `starts_at` - Optional start date, also used to derive the end date
pub async fn insert_event(
    db: &DatabaseConnection,
    title: &str,
    starts_at: Option<NaiveDateTime>,
) -> Result<entity::event::Model, DbErr> {
    let event = entity::event::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        starts_at: ActiveValue::Set(starts_at),
        ends_at: ActiveValue::Set(starts_at),
        state: ActiveValue::Set("SP".to_string()),
        municipality: ActiveValue::Set("São Paulo".to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    event.insert(db).await
}
