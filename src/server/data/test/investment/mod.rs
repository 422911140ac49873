use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::server::{
    data::investment::InvestmentRepository,
    model::investment::{CreateInvestmentParams, UpdateInvestmentParams},
};

fn create_params(name: &str) -> CreateInvestmentParams {
    CreateInvestmentParams {
        name: name.to_string(),
        partner: "Hydro Partners LLC".to_string(),
        amount: 250_000_000,
        stage: "proposed".to_string(),
    }
}

/// Tests the investment round trip: create, update, delete.
///
/// Expected: each step reflects in the stored row; the final delete
/// reports false once the row is gone.
#[tokio::test]
async fn investment_round_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Investment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InvestmentRepository::new(db);

    let created = repo.create(create_params("Pump modernization")).await?;
    assert_eq!(created.stage, "proposed");

    let updated = repo
        .update(UpdateInvestmentParams {
            id: created.id,
            name: "Pump modernization".to_string(),
            partner: "Hydro Partners LLC".to_string(),
            amount: 300_000_000,
            stage: "signed".to_string(),
        })
        .await?
        .unwrap();
    assert_eq!(updated.stage, "signed");
    assert_eq!(updated.amount, 300_000_000);

    assert!(repo.delete(created.id).await?);
    assert!(!repo.delete(created.id).await?);

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Ok(None).
#[tokio::test]
async fn missing_investment_updates_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Investment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InvestmentRepository::new(db);
    let updated = repo
        .update(UpdateInvestmentParams {
            id: 4242,
            name: "Ghost".to_string(),
            partner: "Nobody".to_string(),
            amount: 1,
            stage: "proposed".to_string(),
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
