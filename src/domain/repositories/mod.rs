//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the storage collaborators of the admission flow.
//! Concrete implementations live in `crate::infrastructure::persistence`;
//! mock implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`ClientRepository`] - Client lookup by identifier
//! - [`UserStore`] - Persistence of admitted users

pub mod client_repository;
pub mod user_store;

pub use client_repository::ClientRepository;
pub use user_store::UserStore;

#[cfg(test)]
pub use client_repository::MockClientRepository;
#[cfg(test)]
pub use user_store::MockUserStore;
