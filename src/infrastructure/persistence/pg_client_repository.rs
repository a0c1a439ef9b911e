//! PostgreSQL implementation of the client repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{Client, ClientStatus, NewClient};
use crate::domain::repositories::ClientRepository;
use crate::error::AppError;

/// PostgreSQL repository for client records.
pub struct PgClientRepository {
    pool: Arc<PgPool>,
}

impl PgClientRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Registers a new client and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn insert(&self, new_client: NewClient) -> Result<Client, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO clients (name, client_status)
            VALUES ($1, $2)
            RETURNING id, name, client_status
            "#,
        )
        .bind(&new_client.name)
        .bind(new_client.status.as_i32())
        .fetch_one(self.pool.as_ref())
        .await?;

        client_from_row(&row)
    }

    /// Lists all clients ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        let rows = sqlx::query("SELECT id, name, client_status FROM clients ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.iter().map(client_from_row).collect()
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<Client>, AppError> {
        let row = sqlx::query("SELECT id, name, client_status FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.as_ref().map(client_from_row).transpose()
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}

fn client_from_row(row: &PgRow) -> Result<Client, AppError> {
    let id: i32 = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let raw_status: i32 = row.try_get("client_status")?;

    let status = ClientStatus::try_from(raw_status).map_err(|value| {
        AppError::internal(
            "Unknown client status",
            json!({ "client_id": id, "client_status": value }),
        )
    })?;

    Ok(Client::new(id, name, status))
}
