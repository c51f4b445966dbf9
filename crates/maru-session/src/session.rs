use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A session record. Process-local; lost on restart.
///
/// Ids are opaque strings; nothing in the system parses them. Expiry
/// serializes as an RFC 3339 UTC timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user_id: Option<String>,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub request_count: u64,
}

impl Session {
    pub fn new(user_id: Option<String>, metadata: serde_json::Value, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            metadata,
            created_at: now,
            expires_at: now + ttl,
            last_activity: now,
            request_count: 0,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Refresh activity and slide the expiry window forward.
    pub fn touch(&mut self, ttl: Duration) {
        let now = Utc::now();
        self.last_activity = now;
        self.expires_at = now + ttl;
    }

    pub fn remaining(&self) -> Duration {
        self.expires_at - Utc::now()
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Session(id={}, user={}, requests={})",
            self.id,
            self.user_id.as_deref().unwrap_or("-"),
            self.request_count
        )
    }
}
