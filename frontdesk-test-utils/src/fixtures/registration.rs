use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Insert a registration with standard test values.
///
/// The ID number is stored as given; pass a digits-only value to match what
/// the external registration process writes.
///
/// # Arguments
/// - `event_id` - ID of the owning event
/// - `full_name` - Attendee display name
/// - `id_number` - Digits-only national ID number
/// - `badge_code` - Optional badge token, unique within the event
pub async fn insert_registration(
    db: &DatabaseConnection,
    event_id: i32,
    full_name: &str,
    id_number: &str,
    badge_code: Option<&str>,
) -> Result<entity::registration::Model, DbErr> {
    let registration = entity::registration::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        badge_code: ActiveValue::Set(badge_code.map(str::to_string)),
        full_name: ActiveValue::Set(full_name.to_string()),
        id_number: ActiveValue::Set(id_number.to_string()),
        division: ActiveValue::Set(Some("General".to_string())),
        registered_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
        confirmed: ActiveValue::Set(false),
        ..Default::default()
    };

    registration.insert(db).await
}
