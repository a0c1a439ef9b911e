//! PostgreSQL implementation of the user store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserStore;
use crate::error::AppError;

/// PostgreSQL store for admitted users.
pub struct PgUserStore {
    pool: Arc<PgPool>,
}

impl PgUserStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn add_user(&self, user: User) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO users
                (client_id, firstname, surname, email, date_of_birth, has_credit_limit, credit_limit)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.client.id)
        .bind(&user.firstname)
        .bind(&user.surname)
        .bind(&user.email)
        .bind(user.date_of_birth)
        .bind(user.has_credit_limit)
        .bind(user.credit_limit)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
