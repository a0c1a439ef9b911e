//! Domain layer containing admission entities, rules and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions
//! - [`ports`] - External service traits (credit inquiry, clock)
//! - [`validation`] - Pure admission rules
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Orchestration lives in [`crate::application`].

pub mod entities;
pub mod ports;
pub mod repositories;
pub mod validation;
