use super::*;
use entity::prelude::{Province, Ward};

/// Tests that upserting twice converges on the latest values.
///
/// Expected: one row per id with the updated name
#[tokio::test]
async fn upsert_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Province)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProvinceRepository::new(db);

    repo.upsert(UpsertProvinceParams {
        id: 1,
        province_name: "Ha Noi".to_string(),
        license_plates: serde_json::json!(["29", "30"]),
    })
    .await?;
    repo.upsert(UpsertProvinceParams {
        id: 1,
        province_name: "Hà Nội".to_string(),
        license_plates: serde_json::json!(["29", "30", "31"]),
    })
    .await?;

    let provinces = repo.get_all().await?;
    assert_eq!(provinces.len(), 1);
    assert_eq!(provinces[0].province_name, "Hà Nội");
    assert_eq!(provinces[0].license_plates, serde_json::json!(["29", "30", "31"]));

    Ok(())
}

/// Tests the wholesale ward replacement.
///
/// Expected: the old ward set is gone after a replace, other provinces keep theirs
#[tokio::test]
async fn replace_wards_swaps_the_full_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Province)
        .with_table(Ward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let province = factory::province::create_province(db).await?;
    let other = factory::province::create_province(db).await?;
    factory::ward::create_ward(db, other.id).await?;

    let repo = ProvinceRepository::new(db);

    let ward = |name: &str| NewWard {
        name: name.to_string(),
        merged_from: serde_json::json!([]),
    };

    let inserted = repo
        .replace_wards(province.id, vec![ward("Ba Dinh"), ward("Hoan Kiem")])
        .await?;
    assert_eq!(inserted, 2);

    let inserted = repo.replace_wards(province.id, vec![ward("Tay Ho")]).await?;
    assert_eq!(inserted, 1);

    let wards = repo.get_wards(province.id).await?;
    assert_eq!(wards.len(), 1);
    assert_eq!(wards[0].name, "Tay Ho");

    // Untouched province keeps its ward.
    assert_eq!(repo.get_wards(other.id).await?.len(), 1);

    Ok(())
}

/// Tests clearing a ward list.
///
/// Expected: replacing with an empty set leaves no wards
#[tokio::test]
async fn replace_with_empty_set_clears_wards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Province)
        .with_table(Ward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let province = factory::province::create_province(db).await?;
    factory::ward::create_ward(db, province.id).await?;

    let repo = ProvinceRepository::new(db);
    let inserted = repo.replace_wards(province.id, vec![]).await?;

    assert_eq!(inserted, 0);
    assert!(repo.get_wards(province.id).await?.is_empty());

    Ok(())
}
