use super::*;

/// Tests review ordering for a room.
///
/// Expected: newest comment date first; same-day reviews order by id
/// descending so the most recently written one leads
#[tokio::test]
async fn orders_newest_first_with_id_tiebreak() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = factory::helpers::create_room_with_dependencies(db).await?;

    let today = Utc::now().date_naive();
    let old = factory::review::ReviewFactory::new(db, hotel.id, room.id, user.id)
        .comment_date(today - Duration::days(3))
        .build()
        .await?;
    let same_day_first = factory::review::ReviewFactory::new(db, hotel.id, room.id, user.id)
        .comment_date(today)
        .build()
        .await?;
    let same_day_second = factory::review::ReviewFactory::new(db, hotel.id, room.id, user.id)
        .comment_date(today)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_for_room(hotel.id, room.id).await?;

    let ids: Vec<i32> = reviews.iter().map(|(r, _)| r.id).collect();
    assert_eq!(ids, vec![same_day_second.id, same_day_first.id, old.id]);

    // Authors ride along for display.
    assert_eq!(
        reviews[0].1.as_ref().map(|u| u.id),
        Some(user.id)
    );

    Ok(())
}

/// Tests that reviews are scoped to their room.
///
/// Expected: another room's reviews never leak in, empty room yields empty list
#[tokio::test]
async fn scopes_reviews_to_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let other_room = factory::room::create_room(db, hotel.id).await?;

    factory::review::create_review(db, hotel.id, room.id, user.id).await?;

    let repo = ReviewRepository::new(db);

    assert_eq!(repo.get_for_room(hotel.id, room.id).await?.len(), 1);
    assert!(repo.get_for_room(hotel.id, other_room.id).await?.is_empty());

    Ok(())
}

/// Tests creating a review through the repository.
///
/// Expected: comment date stamped with today
#[tokio::test]
async fn creates_review_dated_today() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = factory::helpers::create_room_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParams {
            hotel_id: hotel.id,
            room_id: room.id,
            user_id: user.id,
            rating: 5,
            comment: "Spotless and quiet".to_string(),
        })
        .await?;

    assert_eq!(review.comment_date, Utc::now().date_naive());
    assert_eq!(review.rating, 5);

    Ok(())
}
