//! Classification-driven credit-limit computation.
//!
//! - [`strategy`] - The [`CreditLimitStrategy`] capability and its variants
//! - [`registry`] - [`StrategyRegistry`] resolving a client name to a strategy

pub mod registry;
pub mod strategy;

pub use registry::{RegistryError, StrategyRegistry};
pub use strategy::{
    CreditLimitStrategy, DefaultCreditLimit, ImportantClientCreditLimit,
    VeryImportantClientCreditLimit,
};
