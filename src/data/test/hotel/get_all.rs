use super::*;

/// Tests the case-insensitive name ordering of the hotel listing.
///
/// Expected: descending name order ignores letter case
#[tokio::test]
async fn orders_by_name_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::hotel::HotelFactory::new(db)
        .hotel_name("alpha Lodge")
        .manager_id(user.id)
        .build()
        .await?;
    factory::hotel::HotelFactory::new(db)
        .hotel_name("Zenith Hotel")
        .manager_id(user.id)
        .build()
        .await?;
    factory::hotel::HotelFactory::new(db)
        .hotel_name("Beach House")
        .manager_id(user.id)
        .build()
        .await?;

    let repo = HotelRepository::new(db);

    let hotels = repo.get_all(None, Some(Order::Desc)).await?;
    let names: Vec<&str> = hotels.iter().map(|(h, _)| h.hotel_name.as_str()).collect();
    assert_eq!(names, vec!["Zenith Hotel", "Beach House", "alpha Lodge"]);

    Ok(())
}

/// Tests the province filter on the hotel listing.
///
/// Expected: only hotels of the requested province, id order when unsorted
#[tokio::test]
async fn filters_by_province() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let province = factory::province::create_province(db).await?;
    let other_province = factory::province::create_province(db).await?;

    let wanted = factory::hotel::HotelFactory::new(db)
        .manager_id(user.id)
        .province_id(province.id)
        .build()
        .await?;
    factory::hotel::HotelFactory::new(db)
        .manager_id(user.id)
        .province_id(other_province.id)
        .build()
        .await?;

    let repo = HotelRepository::new(db);

    let hotels = repo.get_all(Some(province.id), None).await?;
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].0.id, wanted.id);

    let all = repo.get_all(None, None).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}
