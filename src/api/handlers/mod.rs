//! HTTP request handlers for API endpoints.

pub mod admission;
pub mod health;

pub use admission::admit_user_handler;
pub use health::health_handler;
