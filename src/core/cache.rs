//! Workspace cache with TTL
//!
//! Caches the last parsed workspace list per account so UI actions don't
//! shell out to `vtex workspace list` every time. The cache is only
//! eventually truthful: entries expire after a TTL, and events that change
//! ground truth mutate or expire them explicitly.
//!
//! Caching is a pure performance optimization. Store read failures degrade to
//! a miss, store write failures are logged and swallowed; no operation here
//! ever fails the primary workflow.

use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::workspace::WorkspaceRecord;
use crate::store::KeyValueStore;

/// Key under which the whole cache blob lives in the backing store.
pub const CACHE_KEY: &str = "vtexctl.workspaceCache";

/// Default entry lifetime: 30 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// Cached workspace list for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceCacheEntry {
    pub workspaces: Vec<WorkspaceRecord>,
    /// Epoch millis of the last full refresh. Targeted mutations
    /// (`set_active`, `remove`) leave it untouched.
    pub timestamp: u64,
    pub account_name: String,
}

/// Per-account workspace cache over an injected backing store.
pub struct WorkspaceCache<S> {
    store: S,
    ttl: Duration,
}

impl<S: KeyValueStore> WorkspaceCache<S> {
    pub fn new(store: S) -> Self {
        Self::with_ttl(store, DEFAULT_TTL)
    }

    pub fn with_ttl(store: S, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Cached workspace list for `account`, or `None` when there is no entry
    /// or the entry is older than the TTL. A store failure reads as a miss.
    pub fn get(&self, account: &str) -> Option<Vec<WorkspaceRecord>> {
        let entries = self.read_all();
        let entry = match entries.get(account) {
            Some(entry) => entry,
            None => {
                debug!(account, "cache miss: no entry");
                return None;
            }
        };

        let age = now_millis().saturating_sub(entry.timestamp);
        if age >= self.ttl.as_millis() as u64 {
            info!(account, age_ms = age, "cache miss: entry expired");
            return None;
        }

        info!(account, count = entry.workspaces.len(), "cache hit");
        Some(entry.workspaces.clone())
    }

    /// Insert or overwrite the entry for `account`, timestamped now.
    pub fn put(&self, account: &str, workspaces: Vec<WorkspaceRecord>) {
        let mut entries = self.read_all();
        entries.insert(
            account.to_string(),
            WorkspaceCacheEntry {
                workspaces,
                timestamp: now_millis(),
                account_name: account.to_string(),
            },
        );
        self.write_all(&entries);
    }

    /// Remove one account's entry, or every entry when `account` is `None`.
    pub fn clear(&self, account: Option<&str>) {
        match account {
            Some(account) => {
                let mut entries = self.read_all();
                if entries.remove(account).is_some() {
                    self.write_all(&entries);
                    info!(account, "cache cleared");
                }
            }
            None => {
                self.write_all(&HashMap::new());
                info!("all cache entries cleared");
            }
        }
    }

    /// Mark `workspace` as the single active record in `account`'s entry.
    ///
    /// Returns `false` when there is no entry or no record changed state.
    /// Deliberately does not refresh the entry's timestamp: switching
    /// workspaces locally is not a re-fetch, so it must not extend the TTL.
    pub fn set_active(&self, account: &str, workspace: &str) -> bool {
        let mut entries = self.read_all();
        let entry = match entries.get_mut(account) {
            Some(entry) => entry,
            None => {
                debug!(account, "set_active: no cache entry");
                return false;
            }
        };

        let mut changed = false;
        for record in &mut entry.workspaces {
            let should_be_active = record.name == workspace;
            if record.is_active != should_be_active {
                record.is_active = should_be_active;
                changed = true;
            }
        }

        if !changed {
            debug!(account, workspace, "set_active: no change");
            return false;
        }

        self.write_all(&entries);
        info!(account, workspace, "active workspace updated in cache");
        true
    }

    /// Delete the record named `workspace` from `account`'s entry.
    ///
    /// Returns whether a record was actually removed. Like `set_active`, the
    /// timestamp stays as it was.
    pub fn remove(&self, account: &str, workspace: &str) -> bool {
        let mut entries = self.read_all();
        let entry = match entries.get_mut(account) {
            Some(entry) => entry,
            None => return false,
        };

        let before = entry.workspaces.len();
        entry.workspaces.retain(|record| record.name != workspace);
        if entry.workspaces.len() == before {
            debug!(account, workspace, "remove: workspace not in cache");
            return false;
        }

        self.write_all(&entries);
        info!(account, workspace, "workspace removed from cache");
        true
    }

    /// Zero the entry's timestamp so the next `get` reports a miss, without
    /// discarding the cached records.
    ///
    /// Used when an external actor (another CLI session, an edited
    /// workspace.json) may have changed ground truth: staleness is resolved
    /// lazily on the next read instead of by locking.
    pub fn force_expire(&self, account: &str) -> bool {
        let mut entries = self.read_all();
        let entry = match entries.get_mut(account) {
            Some(entry) => entry,
            None => return false,
        };

        entry.timestamp = 0;
        self.write_all(&entries);
        info!(account, "cache entry force-expired");
        true
    }

    fn read_all(&self) -> HashMap<String, WorkspaceCacheEntry> {
        let value = match self.store.get(CACHE_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return HashMap::new(),
            Err(e) => {
                warn!("cache store read failed, treating as empty: {e}");
                return HashMap::new();
            }
        };

        match serde_json::from_value(value) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("cache blob malformed, treating as empty: {e}");
                HashMap::new()
            }
        }
    }

    fn write_all(&self, entries: &HashMap<String, WorkspaceCacheEntry>) {
        let value = match serde_json::to_value(entries) {
            Ok(value) => value,
            Err(e) => {
                warn!("failed to serialize cache blob: {e}");
                return;
            }
        };
        if let Err(e) = self.store.update(CACHE_KEY, value) {
            warn!("cache store write failed, continuing without cache: {e}");
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
