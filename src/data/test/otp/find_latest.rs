use super::*;

/// Tests that only the newest code per email and purpose is returned.
///
/// Expected: the latest row wins; other purposes and emails are untouched
#[tokio::test]
async fn returns_newest_code_for_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PasswordResetToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::password_reset_token::create_otp_token(
        db,
        "guest@example.com",
        "111111",
        OtpPurpose::Register,
        10,
    )
    .await?;
    factory::password_reset_token::create_otp_token(
        db,
        "guest@example.com",
        "222222",
        OtpPurpose::Register,
        10,
    )
    .await?;
    factory::password_reset_token::create_otp_token(
        db,
        "guest@example.com",
        "999999",
        OtpPurpose::ResetPassword,
        10,
    )
    .await?;

    let repo = OtpRepository::new(db);

    let latest = repo
        .find_latest("guest@example.com", OtpPurpose::Register)
        .await?
        .unwrap();
    assert_eq!(latest.otp, "222222");

    let reset = repo
        .find_latest("guest@example.com", OtpPurpose::ResetPassword)
        .await?
        .unwrap();
    assert_eq!(reset.otp, "999999");

    assert!(repo
        .find_latest("other@example.com", OtpPurpose::Register)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting every code for an email and purpose.
///
/// Expected: the pair is wiped while other purposes survive
#[tokio::test]
async fn delete_for_clears_only_the_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PasswordResetToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::password_reset_token::create_otp_token(
        db,
        "guest@example.com",
        "111111",
        OtpPurpose::Register,
        10,
    )
    .await?;
    factory::password_reset_token::create_otp_token(
        db,
        "guest@example.com",
        "222222",
        OtpPurpose::Register,
        10,
    )
    .await?;
    factory::password_reset_token::create_otp_token(
        db,
        "guest@example.com",
        "999999",
        OtpPurpose::ResetPassword,
        10,
    )
    .await?;

    let repo = OtpRepository::new(db);

    let deleted = repo
        .delete_for("guest@example.com", OtpPurpose::Register)
        .await?;
    assert_eq!(deleted, 2);

    assert!(repo
        .find_latest("guest@example.com", OtpPurpose::Register)
        .await?
        .is_none());
    assert!(repo
        .find_latest("guest@example.com", OtpPurpose::ResetPassword)
        .await?
        .is_some());

    Ok(())
}

/// Tests the stored expiry window.
///
/// Expected: a code issued with a ten minute window expires in the future
#[tokio::test]
async fn stores_expiry_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PasswordResetToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OtpRepository::new(db);
    let token = repo
        .create(
            "guest@example.com",
            "123456",
            OtpPurpose::Register,
            Utc::now() + Duration::minutes(10),
        )
        .await?;

    assert!(token.expired_at > Utc::now());
    assert!(token.expired_at <= Utc::now() + Duration::minutes(10));

    Ok(())
}
