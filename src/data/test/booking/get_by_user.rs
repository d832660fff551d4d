use super::*;

/// Tests listing bookings per user with the optional status filter.
///
/// Expected: only the caller's bookings, filtered by status when given,
/// newest first
#[tokio::test]
async fn filters_by_user_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room, payment_method) =
        factory::helpers::create_booking_dependencies(db).await?;
    let other_user = factory::user::create_user(db).await?;

    let pending =
        factory::booking::BookingFactory::new(db, user.id, room.id, hotel.id, payment_method.id)
            .build()
            .await?;
    let confirmed =
        factory::booking::BookingFactory::new(db, user.id, room.id, hotel.id, payment_method.id)
            .status(BookingStatus::Confirmed)
            .build()
            .await?;
    factory::booking::BookingFactory::new(db, other_user.id, room.id, hotel.id, payment_method.id)
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    let all = repo.get_by_user(user.id, None).await?;
    assert_eq!(all.len(), 2);
    // Newest first.
    assert_eq!(all[0].id, confirmed.id);
    assert_eq!(all[1].id, pending.id);

    let only_pending = repo
        .get_by_user(user.id, Some(BookingStatus::Pending))
        .await?;
    assert_eq!(only_pending.len(), 1);
    assert_eq!(only_pending[0].id, pending.id);

    Ok(())
}
