use super::*;

/// Tests the best hotels ordering.
///
/// Expected: highest star rating first, limited to the requested count
#[tokio::test]
async fn orders_by_star_rating_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let three_star = factory::hotel::HotelFactory::new(db)
        .manager_id(user.id)
        .star_rating(3)
        .build()
        .await?;
    let five_star = factory::hotel::HotelFactory::new(db)
        .manager_id(user.id)
        .star_rating(5)
        .build()
        .await?;
    let four_star = factory::hotel::HotelFactory::new(db)
        .manager_id(user.id)
        .star_rating(4)
        .build()
        .await?;

    let repo = HotelRepository::new(db);

    let best = repo.get_best(2).await?;
    let ids: Vec<i32> = best.iter().map(|(h, _)| h.id).collect();
    assert_eq!(ids, vec![five_star.id, four_star.id]);
    assert!(ids.iter().all(|id| *id != three_star.id));

    Ok(())
}

/// Tests the cover image lookup for hotels.
///
/// Expected: first image by insertion order, None for bare hotels
#[tokio::test]
async fn first_image_returns_earliest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let hotel = factory::hotel::HotelFactory::new(db)
        .manager_id(user.id)
        .build()
        .await?;
    let bare = factory::hotel::HotelFactory::new(db)
        .manager_id(user.id)
        .build()
        .await?;

    let first = factory::hotel_image::create_hotel_image(db, hotel.id).await?;
    factory::hotel_image::create_hotel_image(db, hotel.id).await?;

    let repo = HotelRepository::new(db);

    assert_eq!(
        repo.first_image(hotel.id).await?.map(|i| i.id),
        Some(first.id)
    );
    assert!(repo.first_image(bare.id).await?.is_none());

    Ok(())
}
