use super::*;

fn default_sort() -> (entity::room::Column, Order) {
    (entity::room::Column::Id, Order::Asc)
}

/// Tests that search only ever returns available rooms.
///
/// Expected: the unavailable room is absent from an unfiltered search
#[tokio::test]
async fn excludes_unavailable_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, hotel, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let hidden = factory::room::RoomFactory::new(db, hotel.id)
        .available(false)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let (rooms, total, _) = repo
        .search(RoomSearchFilter::default(), default_sort(), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(rooms[0].id, room.id);
    assert!(rooms.iter().all(|r| r.id != hidden.id));

    Ok(())
}

/// Tests the keyword match across room and hotel columns.
///
/// Expected: a keyword from the hotel name finds the hotel's rooms,
/// case-insensitively, and an unrelated keyword finds nothing
#[tokio::test]
async fn keyword_matches_room_and_hotel_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let seaside = factory::hotel::HotelFactory::new(db)
        .hotel_name("Seaside Resort")
        .manager_id(user.id)
        .build()
        .await?;
    let city = factory::hotel::HotelFactory::new(db)
        .hotel_name("City Center Inn")
        .manager_id(user.id)
        .build()
        .await?;

    let beach_room = factory::room::RoomFactory::new(db, seaside.id)
        .room_type("Standard")
        .build()
        .await?;
    factory::room::RoomFactory::new(db, city.id)
        .room_type("Standard")
        .build()
        .await?;
    let deluxe = factory::room::RoomFactory::new(db, city.id)
        .room_type("Deluxe Suite")
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    let (rooms, _, _) = repo
        .search(
            RoomSearchFilter {
                keyword: Some("SEASIDE".to_string()),
                ..Default::default()
            },
            default_sort(),
            0,
            10,
        )
        .await?;
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, beach_room.id);

    let (rooms, _, _) = repo
        .search(
            RoomSearchFilter {
                keyword: Some("deluxe".to_string()),
                ..Default::default()
            },
            default_sort(),
            0,
            10,
        )
        .await?;
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, deluxe.id);

    let (rooms, total, _) = repo
        .search(
            RoomSearchFilter {
                keyword: Some("nonexistent".to_string()),
                ..Default::default()
            },
            default_sort(),
            0,
            10,
        )
        .await?;
    assert!(rooms.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests the price range and capacity filters combined.
///
/// Expected: only rooms satisfying every filter at once are returned
#[tokio::test]
async fn filters_combine_conjunctively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, hotel, _room) = factory::helpers::create_room_with_dependencies(db).await?;

    let cheap_small = factory::room::RoomFactory::new(db, hotel.id)
        .price(Decimal::new(5000, 2))
        .max_adults(2)
        .build()
        .await?;
    let cheap_large = factory::room::RoomFactory::new(db, hotel.id)
        .price(Decimal::new(6000, 2))
        .max_adults(4)
        .build()
        .await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .price(Decimal::new(30000, 2))
        .max_adults(4)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let (rooms, total, _) = repo
        .search(
            RoomSearchFilter {
                min_price: Some(Decimal::new(1000, 2)),
                max_price: Some(Decimal::new(10000, 2)),
                min_adults: Some(4),
                ..Default::default()
            },
            default_sort(),
            0,
            10,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(rooms[0].id, cheap_large.id);
    assert!(rooms.iter().all(|r| r.id != cheap_small.id));

    Ok(())
}

/// Tests pagination totals and page boundaries.
///
/// Expected: totals count every match while pages slice them
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let hotel = factory::hotel::HotelFactory::new(db)
        .manager_id(user.id)
        .build()
        .await?;
    for _ in 0..5 {
        factory::room::create_room(db, hotel.id).await?;
    }

    let repo = RoomRepository::new(db);

    let (first, total, pages) = repo
        .search(RoomSearchFilter::default(), default_sort(), 0, 2)
        .await?;
    assert_eq!(first.len(), 2);
    assert_eq!(total, 5);
    assert_eq!(pages, 3);

    let (last, _, _) = repo
        .search(RoomSearchFilter::default(), default_sort(), 2, 2)
        .await?;
    assert_eq!(last.len(), 1);

    Ok(())
}

/// Tests the sort column and direction.
///
/// Expected: descending price ordering puts the most expensive room first
#[tokio::test]
async fn sorts_by_requested_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let hotel = factory::hotel::HotelFactory::new(db)
        .manager_id(user.id)
        .build()
        .await?;

    factory::room::RoomFactory::new(db, hotel.id)
        .price(Decimal::new(10000, 2))
        .build()
        .await?;
    let expensive = factory::room::RoomFactory::new(db, hotel.id)
        .price(Decimal::new(50000, 2))
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let (rooms, _, _) = repo
        .search(
            RoomSearchFilter::default(),
            (entity::room::Column::Price, Order::Desc),
            0,
            10,
        )
        .await?;

    assert_eq!(rooms[0].id, expensive.id);

    Ok(())
}
