//! Credit inquiry clients.

mod http_credit_inquiry;

pub use http_credit_inquiry::{CreditLimitResponse, HttpCreditInquiry};
