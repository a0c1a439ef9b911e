//! Shared state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::credit::StrategyRegistry;
use crate::application::services::AdmissionService;
use crate::domain::repositories::ClientRepository;

#[derive(Clone)]
pub struct AppState {
    pub admission_service: Arc<AdmissionService>,
    pub client_repository: Arc<dyn ClientRepository>,
    pub strategies: Arc<StrategyRegistry>,
}

impl AppState {
    pub fn new(
        admission_service: Arc<AdmissionService>,
        client_repository: Arc<dyn ClientRepository>,
        strategies: Arc<StrategyRegistry>,
    ) -> Self {
        Self {
            admission_service,
            client_repository,
            strategies,
        }
    }
}
