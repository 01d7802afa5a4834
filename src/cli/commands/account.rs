//! Account commands: list, switch

use crate::cli::output::{Output, Table};
use crate::cli::progress::Reporter;
use crate::core::cache::WorkspaceCache;
use crate::core::session::SessionDir;
use crate::store::KeyValueStore;
use crate::vtex::{self, CommandRunner};

/// Switch the active account via `vtex switch`.
pub async fn run_account_switch<S: KeyValueStore>(
    session: &SessionDir,
    cache: &WorkspaceCache<S>,
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
    account: &str,
) -> anyhow::Result<()> {
    if session.account().as_deref() == Some(account) {
        Output::info(&format!(
            "Already using account {}",
            Output::account_name(account)
        ));
        return Ok(());
    }

    reporter.report(0.5, &format!("Switching to account {account}"));
    vtex::switch_account(runner, account).await?;

    // Another CLI session may have changed this account's workspaces since
    // we last cached them; force the next list to re-fetch.
    cache.force_expire(account);

    Output::success(&format!(
        "Switched to account {}",
        Output::account_name(account)
    ));
    Ok(())
}

/// List logged-in accounts from `tokens.json`, marking the current one.
pub fn run_account_list(session: &SessionDir) -> anyhow::Result<()> {
    let accounts = session.available_accounts();
    if accounts.is_empty() {
        Output::warning("No VTEX accounts found. Run `vtex login <account>` first.");
        return Ok(());
    }

    let current = session.account();
    let mut table = Table::new(vec!["", "Account"]);
    for account in &accounts {
        let is_current = current.as_deref() == Some(account.as_str());
        table.add_row(vec![
            &Output::active_marker(is_current),
            &Output::account_name(account),
        ]);
    }
    table.print();
    Ok(())
}
