use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use maru_core::Envelope;
use maru_session::Session;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/status", get(status))
}

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/session", post(start_session))
        .route("/api/v1/sessions", get(list_sessions))
        .route(
            "/api/v1/session/{id}",
            get(validate_session).delete(delete_session),
        )
        .route("/api/v1/session/{id}/notify", post(notify_session))
}

#[derive(Debug, Default, Deserialize)]
pub struct StartSessionRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// Session record as the API returns it. Timestamps are RFC 3339 UTC.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub request_count: u64,
}

impl From<Session> for SessionResponse {
    fn from(s: Session) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            metadata: s.metadata,
            created_at: s.created_at,
            expires_at: s.expires_at,
            last_activity: s.last_activity,
            request_count: s.request_count,
        }
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn status(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_seconds": state.start_time.elapsed().as_secs(),
        "sessions": state.sessions.count(),
        "connections": state.registry.connection_count(),
    }))
}

async fn start_session(
    State(state): State<AppState>,
    Json(body): Json<StartSessionRequest>,
) -> (StatusCode, Json<SessionResponse>) {
    let session = state
        .sessions
        .create(body.user_id, body.metadata.unwrap_or(Value::Null));
    (StatusCode::CREATED, Json(session.into()))
}

async fn validate_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state.sessions.validate(&id)?;
    Ok(Json(session.into()))
}

async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !state.sessions.delete(&id) {
        return Err(ApiError::not_found(format!("Session not found: {id}")));
    }
    state.registry.discard(&id);
    Ok(Json(json!({ "deleted": true, "id": id })))
}

async fn list_sessions(State(state): State<AppState>) -> Json<Value> {
    let sessions: Vec<SessionResponse> =
        state.sessions.list().into_iter().map(Into::into).collect();
    Json(json!({ "count": sessions.len(), "sessions": sessions }))
}

#[derive(Debug, Deserialize)]
pub struct NotifyRequest {
    pub content: String,
}

/// Out-of-band push into a session's socket. Buffered while the
/// session is disconnected, replayed on reconnect.
async fn notify_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<NotifyRequest>,
) -> Result<Json<Value>, ApiError> {
    state.sessions.peek(&id).ok_or_else(|| {
        ApiError::not_found(format!("Session not found: {id}"))
    })?;
    let live = state.registry.send(
        &id,
        Envelope::Notice {
            content: body.content,
        },
    );
    Ok(Json(json!({ "delivered": live, "queued": !live })))
}
