use super::*;

/// Tests listing a hotel's rooms within a price range.
///
/// Expected: rooms outside the range and rooms of other hotels are absent
#[tokio::test]
async fn filters_by_hotel_and_price_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let hotel = factory::hotel::HotelFactory::new(db)
        .manager_id(user.id)
        .build()
        .await?;
    let other_hotel = factory::hotel::HotelFactory::new(db)
        .manager_id(user.id)
        .build()
        .await?;

    let in_range = factory::room::RoomFactory::new(db, hotel.id)
        .price(Decimal::new(15000, 2))
        .build()
        .await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .price(Decimal::new(90000, 2))
        .build()
        .await?;
    factory::room::RoomFactory::new(db, other_hotel.id)
        .price(Decimal::new(15000, 2))
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let rooms = repo
        .get_by_hotel(
            hotel.id,
            Some(Decimal::new(10000, 2)),
            Some(Decimal::new(20000, 2)),
            (entity::room::Column::Id, Order::Asc),
        )
        .await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, in_range.id);

    Ok(())
}

/// Tests alphabetical ordering by room type.
///
/// Expected: title_za ordering reverses the alphabet
#[tokio::test]
async fn sorts_by_room_type_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let hotel = factory::hotel::HotelFactory::new(db)
        .manager_id(user.id)
        .build()
        .await?;

    factory::room::RoomFactory::new(db, hotel.id)
        .room_type("Apartment")
        .build()
        .await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .room_type("Zen Suite")
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let rooms = repo
        .get_by_hotel(
            hotel.id,
            None,
            None,
            (entity::room::Column::RoomType, Order::Desc),
        )
        .await?;

    assert_eq!(rooms[0].room_type, "Zen Suite");
    assert_eq!(rooms[1].room_type, "Apartment");

    Ok(())
}
