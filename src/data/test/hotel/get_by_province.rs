use super::*;

/// Tests filtering hotels by province with the province row attached.
///
/// Expected: only hotels of the province, each carrying its province model
#[tokio::test]
async fn returns_hotels_of_one_province() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let province = factory::province::create_province(db).await?;
    let other_province = factory::province::create_province(db).await?;

    let hotel = factory::hotel::HotelFactory::new(db)
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
    let hotels = repo.get_by_province(province.id).await?;

    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].0.id, hotel.id);
    assert_eq!(
        hotels[0].1.as_ref().map(|p| p.province_name.clone()),
        Some(province.province_name.clone())
    );

    Ok(())
}

/// Tests the single hotel lookup.
///
/// Expected: Ok(Some) with province for a stored id, Ok(None) otherwise
#[tokio::test]
async fn get_by_id_resolves_province() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let province = factory::province::create_province(db).await?;
    let hotel = factory::hotel::HotelFactory::new(db)
        .manager_id(user.id)
        .province_id(province.id)
        .build()
        .await?;

    let repo = HotelRepository::new(db);

    let found = repo.get_by_id(hotel.id).await?;
    let (found_hotel, found_province) = found.unwrap();
    assert_eq!(found_hotel.id, hotel.id);
    assert_eq!(found_province.map(|p| p.id), Some(province.id));

    assert!(repo.get_by_id(99_999).await?.is_none());

    Ok(())
}
