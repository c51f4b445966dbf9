//! maru HTTP/WebSocket API server (Axum).
//!
//! Session lifecycle endpoints, health/status monitoring, and the chat
//! socket with queue-on-miss delivery.

pub mod error;
pub mod routes;
pub mod state;
pub mod sweep;
pub mod ws;

use axum::Router;
use maru_core::MaruConfig;
use state::AppState;

/// Build the application router from a config.
pub fn app(config: MaruConfig) -> maru_core::Result<Router> {
    Ok(app_with_state(AppState::new(config)?))
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::session_routes())
        .merge(ws::ws_routes())
        .with_state(state)
}
