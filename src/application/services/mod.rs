//! Business logic services for the application layer.

pub mod admission_service;

pub use admission_service::AdmissionService;
