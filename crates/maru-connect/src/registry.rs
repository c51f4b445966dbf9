use chrono::{DateTime, Utc};
use maru_core::Envelope;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Sender half of a connection's outbound channel. The socket task owns
/// the receiver and drains it into the WebSocket sink.
pub type OutboundSender = mpsc::UnboundedSender<Envelope>;

/// An envelope buffered while its session had no live connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingMessage {
    pub envelope: Envelope,
    pub queued_at: DateTime<Utc>,
}

#[derive(Default)]
struct RegistryInner {
    live: HashMap<String, OutboundSender>,
    pending: HashMap<String, VecDeque<PendingMessage>>,
}

/// Connection registry: session id → live sender, with a bounded
/// pending queue used only while the session is disconnected.
///
/// One live connection per session; attaching replaces any previous
/// sender, which the old socket observes as its channel closing.
#[derive(Clone)]
pub struct ConnectionRegistry {
    inner: Arc<Mutex<RegistryInner>>,
    max_pending: usize,
}

impl ConnectionRegistry {
    pub fn new(max_pending: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RegistryInner::default())),
            max_pending,
        }
    }

    /// Register a live connection and take the session's backlog.
    ///
    /// The drain happens under the same lock that enqueues, so each
    /// buffered message is handed out exactly once.
    pub fn attach(&self, session_id: &str, sender: OutboundSender) -> Vec<PendingMessage> {
        let mut inner = self.inner.lock().unwrap();
        if inner.live.insert(session_id.to_string(), sender).is_some() {
            tracing::debug!(session_id, "replaced live connection");
        }
        let backlog: Vec<PendingMessage> = inner
            .pending
            .remove(session_id)
            .map(Vec::from)
            .unwrap_or_default();
        if !backlog.is_empty() {
            tracing::debug!(session_id, count = backlog.len(), "replaying backlog");
        }
        backlog
    }

    /// Remove the live entry, but only if it still belongs to `sender`.
    /// A connection that was already replaced must not detach its
    /// successor. The pending queue is left intact.
    pub fn detach(&self, session_id: &str, sender: &OutboundSender) {
        let mut inner = self.inner.lock().unwrap();
        let owned = inner
            .live
            .get(session_id)
            .is_some_and(|current| current.same_channel(sender));
        if owned {
            inner.live.remove(session_id);
        }
    }

    /// Deliver to the live connection, or buffer while disconnected.
    /// Returns true when delivery was live.
    pub fn send(&self, session_id: &str, envelope: Envelope) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let envelope = if let Some(sender) = inner.live.get(session_id) {
            match sender.send(envelope) {
                Ok(()) => return true,
                Err(mpsc::error::SendError(envelope)) => {
                    // Receiver gone without detach: treat as disconnected.
                    inner.live.remove(session_id);
                    envelope
                }
            }
        } else {
            envelope
        };
        Self::enqueue(&mut inner, session_id, envelope, self.max_pending);
        false
    }

    fn enqueue(inner: &mut RegistryInner, session_id: &str, envelope: Envelope, max: usize) {
        let queue = inner.pending.entry(session_id.to_string()).or_default();
        queue.push_back(PendingMessage {
            envelope,
            queued_at: Utc::now(),
        });
        if queue.len() > max {
            queue.pop_front();
            tracing::warn!(session_id, max, "pending queue full, dropped oldest");
        }
    }

    /// Drop both the live sender and the pending queue. Used when the
    /// session itself is deleted or expires.
    pub fn discard(&self, session_id: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.live.remove(session_id);
        inner.pending.remove(session_id);
    }

    pub fn is_connected(&self, session_id: &str) -> bool {
        self.inner.lock().unwrap().live.contains_key(session_id)
    }

    pub fn connection_count(&self) -> usize {
        self.inner.lock().unwrap().live.len()
    }

    pub fn pending_count(&self, session_id: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .pending
            .get(session_id)
            .map_or(0, VecDeque::len)
    }
}
