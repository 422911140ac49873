use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::account::AccountRepository, model::account::CreateAccountParams};

/// Tests creating an account with a supplied access code.
///
/// Expected: Ok with the code stored verbatim.
#[tokio::test]
async fn creates_account_with_access_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Employee)
        .with_table(Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let account = repo
        .create(
            CreateAccountParams {
                username: "dispatcher".to_string(),
                admin: false,
                employee_id: None,
            },
            "s3cret-code".to_string(),
        )
        .await?;

    assert_eq!(account.username, "dispatcher");
    assert_eq!(account.access_code, "s3cret-code");
    assert!(!account.admin);

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err recognized as a unique-constraint violation.
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Employee)
        .with_table(Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::account::AccountFactory::new(db)
        .username("taken")
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let err = repo
        .create(
            CreateAccountParams {
                username: "taken".to_string(),
                admin: false,
                employee_id: None,
            },
            "code".to_string(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests the admin existence probe used by the startup bootstrap.
///
/// Expected: false with only regular accounts, true once an admin exists.
#[tokio::test]
async fn admin_exists_ignores_regular_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Employee)
        .with_table(Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);

    factory::account::create_account(db).await?;
    assert!(!repo.admin_exists().await?);

    factory::account::create_admin(db).await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}

/// Tests resolving the account linked to an employee.
///
/// Expected: Some for a linked employee, None otherwise.
#[tokio::test]
async fn finds_account_by_employee_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;
    let linked = factory::account::AccountFactory::new(db)
        .employee_id(employee.id)
        .build()
        .await?;

    let repo = AccountRepository::new(db);

    let found = repo.find_by_employee_id(employee.id).await?;
    assert_eq!(found.map(|a| a.id), Some(linked.id));

    assert!(repo.find_by_employee_id(4242).await?.is_none());

    Ok(())
}
