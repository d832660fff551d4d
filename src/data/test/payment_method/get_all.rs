use super::*;

/// Tests listing every payment method.
///
/// Expected: all rows in id order
#[tokio::test]
async fn returns_all_rows_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PaymentMethod)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::payment_method::create_payment_method(db).await?;
    let second = factory::payment_method::create_payment_method(db).await?;

    let repo = PaymentMethodRepository::new(db);

    let methods = repo.get_all().await?;
    assert_eq!(methods.len(), 2);
    assert_eq!(methods[0].id, first.id);
    assert_eq!(methods[1].id, second.id);

    Ok(())
}
