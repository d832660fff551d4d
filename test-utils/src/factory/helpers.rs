//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// values for unique columns, preventing collisions between tests that
/// share a database.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a hotel together with its owning manager and an available room.
///
/// Convenience method for tests that need the full room hierarchy but do
/// not care about the specific values. Use the individual factories when a
/// test needs to customize one of the entities.
///
/// # Returns
/// - `Ok((user, hotel, room))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::hotel::Model,
        entity::room::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let hotel = crate::factory::hotel::HotelFactory::new(db)
        .manager_id(user.id)
        .build()
        .await?;
    let room = crate::factory::room::create_room(db, hotel.id).await?;

    Ok((user, hotel, room))
}

/// Creates everything a booking references: user, hotel, room and a
/// payment method.
///
/// # Returns
/// - `Ok((user, hotel, room, payment_method))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::hotel::Model,
        entity::room::Model,
        entity::payment_method::Model,
    ),
    DbErr,
> {
    let (user, hotel, room) = create_room_with_dependencies(db).await?;
    let payment_method = crate::factory::payment_method::create_payment_method(db).await?;

    Ok((user, hotel, room, payment_method))
}
