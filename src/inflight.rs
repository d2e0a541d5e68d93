//! Per-browser guard against submitting the same action twice at once.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Shown when a submission is refused because the same action is still running.
pub const IN_PROGRESS: &str = "This action is already in progress";

type Key = (String, &'static str);

/// Registry of actions currently awaiting the results API, shared by all workers.
#[derive(Clone, Default)]
pub struct InFlight {
    active: Arc<Mutex<HashSet<Key>>>,
}

/// Marks an action as running until dropped.
pub struct InFlightGuard {
    active: Arc<Mutex<HashSet<Key>>>,
    key: Key,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `action` for `client`. Returns `None` while an earlier claim is still held.
    pub fn try_begin(&self, client: &str, action: &'static str) -> Option<InFlightGuard> {
        let key = (client.to_string(), action);
        let mut set = self.active.lock().unwrap_or_else(|e| e.into_inner());
        if !set.insert(key.clone()) {
            log::warn!("Rejected duplicate '{action}' submission");
            return None;
        }
        Some(InFlightGuard { active: Arc::clone(&self.active), key })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut set = self.active.lock().unwrap_or_else(|e| e.into_inner());
        set.remove(&self.key);
    }
}
