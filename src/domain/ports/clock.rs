//! Clock port used for age checks.

use chrono::NaiveDate;

/// Source of "today".
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
