//! Cache maintenance commands

use crate::cli::output::Output;
use crate::core::cache::WorkspaceCache;
use crate::store::KeyValueStore;

/// Drop one account's cache entry, or everything.
pub fn run_cache_clear<S: KeyValueStore>(
    cache: &WorkspaceCache<S>,
    account: Option<&str>,
) -> anyhow::Result<()> {
    cache.clear(account);
    match account {
        Some(account) => Output::success(&format!("Cache cleared for account {account}")),
        None => Output::success("All cache entries cleared"),
    }
    Ok(())
}

/// Mark one account's cache entry stale without dropping its records.
///
/// Useful after something outside this tool (another terminal, CI) changed
/// the account's workspaces.
pub fn run_cache_expire<S: KeyValueStore>(
    cache: &WorkspaceCache<S>,
    account: &str,
) -> anyhow::Result<()> {
    if cache.force_expire(account) {
        Output::success(&format!(
            "Cache entry for {account} marked stale; next list will re-fetch"
        ));
    } else {
        Output::warning(&format!("No cache entry for account {account}"));
    }
    Ok(())
}
