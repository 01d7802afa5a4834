//! Status command implementation

use crate::cli::output::Output;
use crate::core::session::SessionDir;

/// Show the current VTEX account and workspace from the session files.
pub fn run_status(session: &SessionDir) -> anyhow::Result<()> {
    let info = session.info();

    Output::header("VTEX Session");

    match &info.account {
        Some(account) => Output::kv("Account", &Output::account_name(account)),
        None => Output::kv("Account", "not logged in"),
    }
    match &info.workspace {
        Some(workspace) => Output::kv("Workspace", &Output::workspace_name(workspace)),
        None => Output::kv("Workspace", "none"),
    }

    if info.account.is_none() {
        println!();
        Output::info("Run `vtex login <account>` to start a session");
    }

    Ok(())
}
