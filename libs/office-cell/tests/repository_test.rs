use assert_matches::assert_matches;
use sqlx::PgPool;

use office_cell::{CreateOfficeRequest, OfficeRepository, PgOfficeRepository};
use shared_database::RepositoryError;

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_create_list_and_update(pool: PgPool) {
    let repo = PgOfficeRepository::new(pool);
    let first = repo
        .create(&CreateOfficeRequest { number: 101, floor: 1 })
        .await
        .unwrap();
    let second = repo
        .create(&CreateOfficeRequest { number: 205, floor: 2 })
        .await
        .unwrap();

    let offices = repo.find_all().await.unwrap();
    assert_eq!(offices.iter().map(|o| o.id).collect::<Vec<_>>(), vec![first, second]);

    let mut office = repo.find_by_id(second).await.unwrap();
    assert_eq!((office.number, office.floor), (205, 2));
    office.floor = 3;
    repo.update(&office).await.unwrap();
    assert_eq!(repo.find_by_id(second).await.unwrap().floor, 3);
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_missing_office_is_not_found(pool: PgPool) {
    let repo = PgOfficeRepository::new(pool);

    assert_matches!(repo.find_by_id(9).await, Err(RepositoryError::NotFound));
}
