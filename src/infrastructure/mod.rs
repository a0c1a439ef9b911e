//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory repositories
//! - [`credit`] - HTTP credit service client
//! - [`clock`] - System clock

pub mod clock;
pub mod credit;
pub mod persistence;
