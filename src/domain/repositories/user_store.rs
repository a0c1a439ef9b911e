//! Store trait for admitted users.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Persists admitted users. Takes ownership of the record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a newly admitted user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors. Callers do not retry.
    async fn add_user(&self, user: User) -> Result<(), AppError>;
}
