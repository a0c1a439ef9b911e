//! Core domain entities representing the admission data model.
//!
//! Entities are plain data structures; the admission rules that act on them
//! live in [`crate::domain::validation`] and [`crate::application`].
//!
//! # Entity Types
//!
//! - [`Client`] - A client record users are admitted under
//! - [`User`] - A prospective or admitted user
//! - [`CreditDecision`] - The credit eligibility pair produced by a strategy
//! - [`AdmissionRequest`] / [`AdmissionOutcome`] - Input and result of one admission

pub mod admission;
pub mod client;
pub mod credit;
pub mod user;

pub use admission::{AdmissionOutcome, AdmissionRequest, RejectionReason};
pub use client::{Classification, Client, ClientStatus, NewClient};
pub use credit::CreditDecision;
pub use user::User;
