//! Background expiry sweep.

use crate::state::AppState;
use std::time::Duration;

/// Periodically purge expired sessions and discard their connection
/// state. The read path already enforces expiry; the sweep reclaims
/// records nobody reads again.
pub fn spawn(state: AppState) -> tokio::task::JoinHandle<()> {
    let period = Duration::from_secs(state.config.session.sweep_interval_seconds.max(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let removed = state.sessions.purge_expired();
            for id in &removed {
                state.registry.discard(id);
            }
            if !removed.is_empty() {
                tracing::debug!(count = removed.len(), "swept expired sessions");
            }
        }
    })
}
