//! Repository trait for client lookups.

use crate::domain::entities::Client;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to client records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClientRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryClientRepository`] - Process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Finds a client by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Client))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_by_id(&self, id: i32) -> Result<Option<Client>, AppError>;

    /// Checks if the backing store is reachable.
    async fn health_check(&self) -> bool;
}
