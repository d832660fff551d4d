use super::*;
use crate::data::user::UpdateProfileParams;

/// Tests the partial profile update.
///
/// Expected: provided fields change, absent fields keep their values
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .full_name("Before Update")
        .build()
        .await?;
    let original_email = user.email.clone();

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user,
            UpdateProfileParams {
                full_name: Some("After Update".to_string()),
                phone_number: None,
                gender: Some(true),
                avatar: None,
                date_of_birth: None,
            },
        )
        .await?;

    assert_eq!(updated.full_name, "After Update");
    assert!(updated.gender);
    assert_eq!(updated.email, original_email);

    Ok(())
}

/// Tests flipping the verified flag after OTP confirmation.
///
/// Expected: verified becomes true and persists
#[tokio::test]
async fn marks_user_verified() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .verified(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo.mark_verified(user).await?;
    assert!(updated.verified);

    let reloaded = repo.find_by_id(updated.id).await?.unwrap();
    assert!(reloaded.verified);

    Ok(())
}

/// Tests swapping the stored password hash.
///
/// Expected: the new hash is persisted verbatim
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let user_id = user.id;

    let repo = UserRepository::new(db);
    repo.update_password(user, "$2b$12$newhashnewhashnewhashn".to_string())
        .await?;

    let reloaded = repo.find_by_id(user_id).await?.unwrap();
    assert_eq!(reloaded.password, "$2b$12$newhashnewhashnewhashn");

    Ok(())
}
