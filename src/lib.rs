//! # User Admission
//!
//! Decides whether a prospective user may be admitted into an application,
//! combining identity validation with a credit-limit computation chosen by the
//! client's classification.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, admission rules, collaborator traits
//! - **Application Layer** ([`application`]) - Credit strategies, registry, admission service
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL, credit service client, clock
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Admission Flow
//!
//! 1. Full name, email and minimum age (21) are checked
//! 2. The client is fetched by id; an unknown client is a rejection
//! 3. The client's name selects a credit-limit strategy
//!    (`ImportantClient` doubles the inquiry result, `VeryImportantClient`
//!    skips the inquiry and has no limit, anything else uses it as is)
//! 4. A credit limit below 500 is a rejection
//! 5. The user is persisted
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::credit::{CreditLimitStrategy, StrategyRegistry};
    pub use crate::application::services::AdmissionService;
    pub use crate::domain::entities::{
        AdmissionOutcome, AdmissionRequest, Client, ClientStatus, CreditDecision,
        RejectionReason, User,
    };
    pub use crate::domain::ports::{Clock, CreditInquiry};
    pub use crate::domain::repositories::{ClientRepository, UserStore};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
