use super::*;

/// Tests looking up a payment method by id.
///
/// Expected: the matching row, or none for an unknown id
#[tokio::test]
async fn finds_existing_row_and_misses_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PaymentMethod)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let method = factory::payment_method::create_payment_method(db).await?;

    let repo = PaymentMethodRepository::new(db);

    let found = repo.find_by_id(method.id).await?.unwrap();
    assert_eq!(found.code, method.code);
    assert_eq!(found.name, method.name);

    assert!(repo.find_by_id(99_999).await?.is_none());

    Ok(())
}
