use super::*;
use test_utils::factory::employee::EmployeeFactory;

/// Tests pagination totals and page size.
///
/// Expected: total counts all rows, pages carry at most `per_page`.
#[tokio::test]
async fn paginates_employees() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Employee).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::employee::create_employee(db).await?;
    }

    let repo = EmployeeRepository::new(db);
    let (page, total) = repo.get_paginated(None, 0, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(page.len(), 2);

    let (last_page, _) = repo.get_paginated(None, 2, 2).await?;
    assert_eq!(last_page.len(), 1);

    Ok(())
}

/// Tests the name substring filter.
///
/// Expected: only matching employees are returned and counted.
#[tokio::test]
async fn filters_by_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Employee).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::employee::create_employee(db).await?;
    EmployeeFactory::new(db)
        .full_name("Zulfiya Rahimova")
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    let (matches, total) = repo.get_paginated(Some("Zulfiya".to_string()), 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].full_name, "Zulfiya Rahimova");

    Ok(())
}
