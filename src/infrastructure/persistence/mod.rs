//! Storage implementations of the domain repository traits.
//!
//! - [`PgClientRepository`] / [`PgUserStore`] - PostgreSQL via sqlx
//! - [`InMemoryClientRepository`] / [`InMemoryUserStore`] - Process-local

mod memory;
mod pg_client_repository;
mod pg_user_store;

pub use memory::{InMemoryClientRepository, InMemoryUserStore};
pub use pg_client_repository::PgClientRepository;
pub use pg_user_store::PgUserStore;
