// Application state (AppState)

use crate::core::config::Config;
use crate::metrics::collector::Metrics;
use crate::services::state_service::StateService;
use crate::stores::repository::{StateRepository, UserRepository};
use std::sync::Arc;

/// Shared application state
///
/// Repositories are injected here once and shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// State lookup accessor
    pub state_service: StateService,

    /// Raw access to the state table, used for seeding and health checks
    pub state_repository: Arc<dyn StateRepository>,

    /// User records for building login payloads
    pub user_repository: Arc<dyn UserRepository>,

    /// Request counters
    pub metrics: Arc<Metrics>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        config: Config,
        state_repository: Arc<dyn StateRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            state_service: StateService::new(Arc::clone(&state_repository)),
            state_repository,
            user_repository,
            metrics: Arc::new(Metrics::new()),
            config: Arc::new(config),
        }
    }
}
