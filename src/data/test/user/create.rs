use super::*;

fn params(email: &str, phone: &str) -> CreateUserParams {
    CreateUserParams {
        full_name: "Test Guest".to_string(),
        email: email.to_string(),
        password: "$2b$12$C6UzMDM.H6dfI/f/IKcEeO".to_string(),
        phone_number: phone.to_string(),
        gender: false,
        avatar: None,
        date_of_birth: NaiveDate::from_ymd_opt(1992, 1, 20).unwrap(),
    }
}

/// Tests creating a new user account.
///
/// Expected: Ok with an unverified user carrying the given fields
#[tokio::test]
async fn creates_unverified_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(params("guest@example.com", "0912345678"))
        .await?;

    assert_eq!(user.email, "guest@example.com");
    assert_eq!(user.phone_number, "0912345678");
    assert!(!user.verified);

    Ok(())
}

/// Tests the uniqueness probes used by registration validation.
///
/// Expected: existing email and phone report true, fresh values false
#[tokio::test]
async fn existence_checks_match_stored_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .phone_number("0355555555")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.exists_by_email("taken@example.com").await?);
    assert!(!repo.exists_by_email("free@example.com").await?);
    assert!(repo.exists_by_phone_number("0355555555").await?);
    assert!(!repo.exists_by_phone_number("0366666666").await?);

    // A user's own number does not count as taken by another account.
    assert!(!repo.phone_taken_by_other("0355555555", user.id).await?);
    assert!(repo.phone_taken_by_other("0355555555", user.id + 1).await?);

    Ok(())
}
