//! Application state shared across all handlers.
//!
//! Everything here is constructed once and injected; there are no
//! module-level singletons.

use maru_agent::AgentDispatcher;
use maru_connect::ConnectionRegistry;
use maru_core::{MaruConfig, Result};
use maru_intent::default_intent_config;
use maru_local::LocalSearchClient;
use maru_session::SessionManager;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MaruConfig>,
    pub sessions: SessionManager,
    pub registry: ConnectionRegistry,
    pub dispatcher: Arc<AgentDispatcher>,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(config: MaruConfig) -> Result<Self> {
        let sessions = SessionManager::new(config.ttl());
        let registry = ConnectionRegistry::new(config.session.max_pending_messages);
        let finder = Arc::new(LocalSearchClient::new(&config.search)?);
        let dispatcher = Arc::new(AgentDispatcher::new(
            finder,
            default_intent_config(),
            config.search.page_size,
        ));
        Ok(Self {
            config: Arc::new(config),
            sessions,
            registry,
            dispatcher,
            start_time: std::time::Instant::now(),
        })
    }
}
