//! Application layer implementing the admission pipeline.
//!
//! This layer orchestrates domain rules by coordinating repository calls,
//! credit-limit strategies and the credit inquiry port.
//!
//! # Components
//!
//! - [`credit`] - Credit-limit strategies and their registry
//! - [`services::admission_service::AdmissionService`] - Admission orchestration

pub mod credit;
pub mod services;
