//! Stale session removal.

use std::sync::TryLockError;

use chrono::Duration;
use tracing::info;

use crate::manager::SessionManager;

/// Remove sessions idle longer than `max_idle`. Sessions currently held by a
/// workflow are never removed. Returns the number removed.
pub fn cleanup_stale_sessions(manager: &SessionManager, max_idle: Duration) -> usize {
    let mut removed = 0;
    manager.retain(|_, handle| {
        let idle = match handle.try_lock() {
            Ok(state) => state.idle_duration(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().idle_duration(),
            Err(TryLockError::WouldBlock) => return true,
        };
        let keep = idle <= max_idle;
        if !keep {
            removed += 1;
        }
        keep
    });
    if removed > 0 {
        info!(removed, "stale sessions removed");
    }
    removed
}
