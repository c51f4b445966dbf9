//! Chat WebSocket: validate, attach, replay backlog, dispatch.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{
        ws::{Message, WebSocket},
        Path, State, WebSocketUpgrade,
    },
    response::Response,
    routing::get,
    Router,
};
use futures::{SinkExt, StreamExt};
use maru_core::{Envelope, MaruError};
use tokio::sync::mpsc;

pub fn ws_routes() -> Router<AppState> {
    Router::new().route("/ws/chat/{session_id}", get(chat_socket))
}

/// Unknown or expired sessions are rejected before the upgrade.
async fn chat_socket(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<Response, ApiError> {
    state.sessions.validate(&session_id)?;
    Ok(ws.on_upgrade(move |socket| handle_chat(state, session_id, socket)))
}

async fn handle_chat(state: AppState, session_id: String, socket: WebSocket) {
    let (mut sink, mut stream) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<Envelope>();

    // Register first, then replay the drained backlog through our own
    // channel so the writer below delivers it in order, exactly once.
    let backlog = state.registry.attach(&session_id, tx.clone());
    for pending in backlog {
        let _ = tx.send(Envelope::Queued {
            queued_at: pending.queued_at,
            message: Box::new(pending.envelope),
        });
    }

    // Single writer draining the session's outbound channel.
    let writer = tokio::spawn(async move {
        while let Some(envelope) = rx.recv().await {
            let text = match envelope.to_json() {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(error = %e, "dropping unserializable envelope");
                    continue;
                }
            };
            if sink.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    tracing::info!(session_id, "chat socket connected");

    while let Some(Ok(message)) = stream.next().await {
        match message {
            Message::Text(text) => {
                if !handle_incoming(&state, &session_id, &tx, text.as_str()).await {
                    break;
                }
            }
            Message::Close(_) => break,
            // Protocol-level ping/pong is handled by the stack.
            _ => {}
        }
    }

    state.registry.detach(&session_id, &tx);
    writer.abort();
    tracing::info!(session_id, "chat socket disconnected");
}

/// Returns false when the socket should close.
async fn handle_incoming(
    state: &AppState,
    session_id: &str,
    tx: &mpsc::UnboundedSender<Envelope>,
    raw: &str,
) -> bool {
    let envelope = match Envelope::from_json(raw) {
        Ok(envelope) => envelope,
        Err(e) => {
            // Malformed input keeps the connection open.
            let _ = tx.send(Envelope::error("invalid_payload", e.to_string()));
            return true;
        }
    };

    match envelope {
        Envelope::Chat { content } => {
            match state.sessions.validate(session_id) {
                Ok(_) => {}
                Err(MaruError::SessionExpired { .. }) | Err(MaruError::SessionNotFound { .. }) => {
                    let _ = tx.send(Envelope::SessionExpired);
                    return false;
                }
                Err(e) => {
                    let _ = tx.send(Envelope::error("internal_error", e.to_string()));
                    return true;
                }
            }
            let reply = state.dispatcher.dispatch(&content).await;
            let _ = tx.send(reply.into_envelope());
            true
        }
        Envelope::Ping => {
            let _ = tx.send(Envelope::Pong);
            true
        }
        other => {
            let _ = tx.send(Envelope::error(
                "unsupported_type",
                format!("unexpected client message: {}", other.type_name()),
            ));
            true
        }
    }
}
