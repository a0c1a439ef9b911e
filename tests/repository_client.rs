//! PostgreSQL adapter tests. Run with a database:
//! `DATABASE_URL=postgres://... cargo test -- --ignored`

use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;
use user_admission::domain::entities::{Client, ClientStatus, NewClient, User};
use user_admission::domain::repositories::{ClientRepository, UserStore};
use user_admission::infrastructure::persistence::{PgClientRepository, PgUserStore};

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_and_get_client(pool: PgPool) {
    let repo = PgClientRepository::new(Arc::new(pool));

    let created = repo
        .insert(NewClient {
            name: "ImportantClient".to_string(),
            status: ClientStatus::Gold,
        })
        .await
        .unwrap();

    let found = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(found.status, ClientStatus::Gold);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_get_missing_client(pool: PgPool) {
    let repo = PgClientRepository::new(Arc::new(pool));

    assert!(repo.get_by_id(999_999).await.unwrap().is_none());
    assert!(repo.health_check().await);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_add_user(pool: PgPool) {
    let pool = Arc::new(pool);
    let clients = PgClientRepository::new(pool.clone());
    let store = PgUserStore::new(pool.clone());

    let client: Client = clients
        .insert(NewClient {
            name: "RandomClientName".to_string(),
            status: ClientStatus::Regular,
        })
        .await
        .unwrap();

    let mut user = User::new(
        "Anatoliy".to_string(),
        "Kutukov".to_string(),
        "ka_2005@mail.ru".to_string(),
        NaiveDate::from_ymd_opt(1979, 7, 15).unwrap(),
        client,
    );
    user.has_credit_limit = true;
    user.credit_limit = 600;

    store.add_user(user).await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE credit_limit = 600")
        .fetch_one(pool.as_ref())
        .await
        .unwrap();
    assert_eq!(count, 1);
}
