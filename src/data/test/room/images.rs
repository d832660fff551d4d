use super::*;

/// Tests that the cover image is the earliest inserted one.
///
/// Expected: first_image returns the first row by id
#[tokio::test]
async fn first_image_is_earliest_inserted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _hotel, room) = factory::helpers::create_room_with_dependencies(db).await?;

    let first = factory::room_image::create_room_image(db, room.id).await?;
    factory::room_image::create_room_image(db, room.id).await?;

    let repo = RoomRepository::new(db);
    let cover = repo.first_image(room.id).await?;

    assert_eq!(cover.map(|i| i.id), Some(first.id));

    Ok(())
}

/// Tests the image lookup scoped to its room.
///
/// Expected: an image id paired with the wrong room id resolves to None
#[tokio::test]
async fn image_lookup_requires_matching_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, hotel, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let other_room = factory::room::create_room(db, hotel.id).await?;
    let image = factory::room_image::create_room_image(db, room.id).await?;

    let repo = RoomRepository::new(db);

    let found = repo.get_image(room.id, image.id).await?;
    assert!(found.is_some());

    let mismatched = repo.get_image(other_room.id, image.id).await?;
    assert!(mismatched.is_none());

    Ok(())
}

/// Tests fetching every image and feature of a room.
///
/// Expected: counts match what was inserted for that room only
#[tokio::test]
async fn lists_images_and_features_per_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, hotel, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let other_room = factory::room::create_room(db, hotel.id).await?;

    factory::room_image::create_room_image(db, room.id).await?;
    factory::room_image::create_room_image(db, room.id).await?;
    factory::room_image::create_room_image(db, other_room.id).await?;
    factory::feature::create_feature(db, room.id).await?;

    let repo = RoomRepository::new(db);

    assert_eq!(repo.get_images(room.id).await?.len(), 2);
    assert_eq!(repo.get_features(room.id).await?.len(), 1);
    assert_eq!(repo.get_features(other_room.id).await?.len(), 0);

    Ok(())
}
