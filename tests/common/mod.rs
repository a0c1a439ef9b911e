#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use user_admission::application::credit::StrategyRegistry;
use user_admission::application::services::AdmissionService;
use user_admission::domain::entities::{Client, ClientStatus};
use user_admission::domain::ports::{Clock, CreditInquiry};
use user_admission::error::AppError;
use user_admission::infrastructure::persistence::{InMemoryClientRepository, InMemoryUserStore};
use user_admission::state::AppState;

pub const CLIENT_ID: i32 = 1;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Clock pinned to a single day.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Credit inquiry returning a fixed limit and counting calls.
pub struct StubCreditInquiry {
    limit: Result<i64, ()>,
    calls: AtomicUsize,
}

impl StubCreditInquiry {
    pub fn returning(limit: i64) -> Self {
        Self {
            limit: Ok(limit),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            limit: Err(()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CreditInquiry for StubCreditInquiry {
    async fn get_credit_limit(
        &self,
        _firstname: &str,
        _surname: &str,
        _date_of_birth: NaiveDate,
    ) -> Result<i64, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.limit.map_err(|_| {
            AppError::upstream("Credit service unavailable", serde_json::json!({}))
        })
    }
}

pub struct TestContext {
    pub state: AppState,
    pub service: Arc<AdmissionService>,
    pub clients: Arc<InMemoryClientRepository>,
    pub users: Arc<InMemoryUserStore>,
    pub inquiry: Arc<StubCreditInquiry>,
}

/// Wires the admission service over in-memory adapters, a stub inquiry and
/// a clock fixed at 2021-02-25, with one client named `client_name`.
pub fn create_test_context(client_name: &str, inquiry: StubCreditInquiry) -> TestContext {
    let clients = Arc::new(InMemoryClientRepository::with_clients([Client::new(
        CLIENT_ID,
        client_name.to_string(),
        ClientStatus::Regular,
    )]));
    let users = Arc::new(InMemoryUserStore::new());
    let inquiry = Arc::new(inquiry);
    let strategies = Arc::new(StrategyRegistry::standard().unwrap());

    let service = Arc::new(AdmissionService::new(
        clients.clone(),
        users.clone(),
        inquiry.clone(),
        Arc::new(FixedClock(date(2021, 2, 25))),
        strategies.clone(),
    ));

    let state = AppState::new(service.clone(), clients.clone(), strategies);

    TestContext {
        state,
        service,
        clients,
        users,
        inquiry,
    }
}
