use super::*;

/// Tests inserting a booking row.
///
/// Expected: Ok with pending status and sequential ids across inserts
#[tokio::test]
async fn creates_pending_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room, payment_method) =
        factory::helpers::create_booking_dependencies(db).await?;

    let check_in = Utc::now().date_naive() + Duration::days(10);
    let repo = BookingRepository::new(db);

    let params = |nights: i64| CreateBookingParams {
        user_id: user.id,
        room_id: room.id,
        hotel_id: hotel.id,
        payment_method_id: payment_method.id,
        check_in_date: check_in,
        check_out_date: check_in + Duration::days(nights),
        adults: 2,
        children: 0,
        infants: 0,
        total_price: Decimal::new(20000, 2),
        payment_option: None,
    };

    let first = repo.create(params(2)).await?;
    let second = repo.create(params(3)).await?;

    assert_eq!(first.status, BookingStatus::Pending);
    assert_eq!(first.user_id, user.id);
    assert_eq!(first.total_price, Decimal::new(20000, 2));
    // Ids come from the sequence, so later bookings always sort after earlier ones.
    assert!(second.id > first.id);

    let reloaded = repo.get_by_id(first.id).await?.unwrap();
    assert_eq!(reloaded.check_out_date, check_in + Duration::days(2));
    assert!(repo.get_by_id(99_999).await?.is_none());

    Ok(())
}
