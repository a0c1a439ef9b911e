//! Ports to external services the admission flow depends on.
//!
//! - [`CreditInquiry`] - Remote credit-limit lookup
//! - [`Clock`] - Source of the current calendar date

pub mod clock;
pub mod credit_inquiry;

pub use clock::Clock;
pub use credit_inquiry::CreditInquiry;

#[cfg(test)]
pub use clock::MockClock;
#[cfg(test)]
pub use credit_inquiry::MockCreditInquiry;
