//! Apps command implementation
//!
//! Builds ready-to-paste `vtex install` / `vtex deploy` command lines from a
//! set of app manifests.

use std::path::PathBuf;

use anyhow::bail;

use crate::cli::commands::diagram::load_manifests;

/// Base commands the apps subcommand can chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppsAction {
    Install,
    Deploy,
}

impl AppsAction {
    pub fn base_command(&self) -> &'static str {
        match self {
            AppsAction::Install => "vtex install",
            AppsAction::Deploy => "vtex deploy",
        }
    }
}

/// Print the chained command for every app found at `paths`.
pub fn run_apps(action: AppsAction, paths: &[PathBuf]) -> anyhow::Result<()> {
    let manifests = load_manifests(paths)?;

    match crate::core::manifest::apps_command(action.base_command(), &manifests) {
        Some(command) => {
            println!("{command}");
            Ok(())
        }
        None => bail!("No apps found in the selection"),
    }
}
