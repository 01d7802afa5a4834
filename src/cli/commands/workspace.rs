//! Workspace commands: list, use, delete

use anyhow::bail;
use dialoguer::Confirm;

use crate::cli::output::{Output, Table};
use crate::cli::progress::Reporter;
use crate::core::cache::WorkspaceCache;
use crate::core::session::SessionDir;
use crate::core::workspace::{parse_workspace_list, WorkspaceRecord};
use crate::store::KeyValueStore;
use crate::vtex::{self, CommandRunner};

/// List workspaces, serving from the cache when fresh.
pub async fn run_workspace_list<S: KeyValueStore>(
    session: &SessionDir,
    cache: &WorkspaceCache<S>,
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
    refresh: bool,
) -> anyhow::Result<()> {
    let account = session.account();

    if !refresh {
        if let Some(account) = &account {
            if let Some(workspaces) = cache.get(account) {
                render_workspaces(&workspaces, true);
                return Ok(());
            }
        }
    }

    reporter.report(0.3, "Fetching workspaces from VTEX CLI");
    let output = vtex::list_workspaces(runner).await?;

    reporter.report(0.6, "Parsing workspace list");
    let workspaces = parse_workspace_list(&output);

    if workspaces.is_empty() {
        // Tolerant-parser contract: an empty result means "nothing
        // detected", so fall back to showing the raw output instead of
        // failing the command.
        reporter.notify("Could not automatically detect workspaces");
        Output::warning("No workspaces detected; raw CLI output follows:");
        println!("{}", output.trim());
        return Ok(());
    }

    if let Some(account) = &account {
        cache.put(account, workspaces.clone());
    }

    reporter.report(1.0, "Done");
    render_workspaces(&workspaces, false);
    Ok(())
}

/// Switch to (or create) a workspace via `vtex use`.
pub async fn run_workspace_use<S: KeyValueStore>(
    session: &SessionDir,
    cache: &WorkspaceCache<S>,
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
    name: &str,
    create: bool,
) -> anyhow::Result<()> {
    if !create && session.workspace().as_deref() == Some(name) {
        Output::info(&format!("Already using workspace {}", Output::workspace_name(name)));
        return Ok(());
    }

    reporter.report(0.5, &format!("Switching to workspace {name}"));
    vtex::use_workspace(runner, name, create).await?;

    if let Some(account) = session.account() {
        // A freshly created workspace is not in the cached list; expire the
        // entry so the next list re-fetches instead of showing stale data.
        if !cache.set_active(&account, name) {
            cache.force_expire(&account);
        }
    }

    Output::success(&format!(
        "Switched to workspace {}",
        Output::workspace_name(name)
    ));
    Ok(())
}

/// Delete a workspace via `vtex workspace delete`.
pub async fn run_workspace_delete<S: KeyValueStore>(
    session: &SessionDir,
    cache: &WorkspaceCache<S>,
    runner: &dyn CommandRunner,
    name: &str,
    assume_yes: bool,
) -> anyhow::Result<()> {
    if name == "master" {
        bail!("Cannot delete the master workspace");
    }
    if session.workspace().as_deref() == Some(name) {
        bail!("Cannot delete the current workspace. Switch to another workspace first.");
    }

    if !assume_yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete workspace '{name}'?"))
            .default(false)
            .interact()?;
        if !confirmed {
            Output::info("Aborted");
            return Ok(());
        }
    }

    vtex::delete_workspace(runner, name).await?;

    // A deletion changes the account's workspace set; drop the whole entry
    // rather than patching it.
    if let Some(account) = session.account() {
        cache.clear(Some(&account));
    }

    Output::success(&format!("Workspace deleted: {name}"));
    Ok(())
}

fn render_workspaces(workspaces: &[WorkspaceRecord], from_cache: bool) {
    let mut table = Table::new(vec!["", "Workspace", "Type"]);
    for ws in workspaces {
        table.add_row(vec![
            &Output::active_marker(ws.is_active),
            &Output::workspace_name(&ws.name),
            &Output::production_flag(ws.is_production),
        ]);
    }
    table.print();

    if from_cache {
        println!();
        Output::info("Showing cached data; run with --refresh for a live list");
    }
}
