use super::Session;
use chrono::{Duration, Utc};
use maru_core::{MaruError, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory TTL session store.
///
/// Expiry is enforced on the read path: a record whose TTL has elapsed
/// is removed the moment any lookup sees it, whether or not the
/// background sweep has run.
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn create(&self, user_id: Option<String>, metadata: serde_json::Value) -> Session {
        let session = Session::new(user_id, metadata, self.ttl);
        self.sessions
            .lock()
            .unwrap()
            .insert(session.id.clone(), session.clone());
        tracing::debug!(session_id = %session.id, "session created");
        session
    }

    /// Validate a session: present and unexpired. Counts as activity,
    /// so it bumps the request counter and slides the expiry window.
    pub fn validate(&self, id: &str) -> Result<Session> {
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.entry(id.to_string()) {
            Entry::Vacant(_) => Err(MaruError::SessionNotFound { id: id.to_string() }),
            Entry::Occupied(mut entry) => {
                if entry.get().is_expired() {
                    entry.remove();
                    tracing::debug!(session_id = %id, "session expired on read");
                    return Err(MaruError::SessionExpired { id: id.to_string() });
                }
                let session = entry.get_mut();
                session.request_count += 1;
                session.touch(self.ttl);
                Ok(session.clone())
            }
        }
    }

    /// Read without counting as activity. Expired records are still
    /// removed on sight.
    pub fn peek(&self, id: &str) -> Option<Session> {
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.entry(id.to_string()) {
            Entry::Vacant(_) => None,
            Entry::Occupied(entry) => {
                if entry.get().is_expired() {
                    entry.remove();
                    None
                } else {
                    Some(entry.get().clone())
                }
            }
        }
    }

    pub fn delete(&self, id: &str) -> bool {
        self.sessions.lock().unwrap().remove(id).is_some()
    }

    /// Drop every expired record, returning the removed ids so callers
    /// can discard associated connection state.
    pub fn purge_expired(&self) -> Vec<String> {
        let now = Utc::now();
        let mut sessions = self.sessions.lock().unwrap();
        let expired: Vec<String> = sessions
            .iter()
            .filter(|(_, s)| s.is_expired_at(now))
            .map(|(id, _)| id.clone())
            .collect();
        for id in &expired {
            sessions.remove(id);
        }
        expired
    }

    pub fn count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    /// Snapshot of all live records, for status surfaces.
    pub fn list(&self) -> Vec<Session> {
        self.sessions.lock().unwrap().values().cloned().collect()
    }
}
