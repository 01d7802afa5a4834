//! VTEX CLI invocation
//!
//! Wraps the external `vtex` binary behind a `CommandRunner` capability so
//! commands can be driven by a fake in tests. The runner resolves with the
//! combined stdout/stderr text; typed operations on top of it decide what
//! counts as failure.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when invoking the VTEX CLI
#[derive(Error, Debug)]
pub enum VtexError {
    #[error("vtex CLI not found in PATH (install it with `npm i -g vtex`)")]
    NotInstalled,

    #[error("Failed to run vtex: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("vtex command failed: {0}")]
    CommandFailed(String),
}

/// Executes a `vtex` subcommand and resolves with its combined output.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, args: &[&str]) -> Result<String, VtexError>;
}

/// Real runner shelling out to the `vtex` binary.
pub struct VtexCli;

#[async_trait]
impl CommandRunner for VtexCli {
    async fn run(&self, args: &[&str]) -> Result<String, VtexError> {
        if which::which("vtex").is_err() {
            return Err(VtexError::NotInstalled);
        }

        debug!(target: "vtexctl::cmd", ?args, "exec vtex");

        let output = tokio::process::Command::new("vtex")
            .args(args)
            .output()
            .await?;

        // The VTEX CLI writes its human-readable tables and its errors to
        // either stream depending on version; callers get both.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(VtexError::CommandFailed(text.trim().to_string()));
        }
        Ok(text)
    }
}

/// `vtex workspace list` — raw output, left to the tolerant parser.
pub async fn list_workspaces(runner: &dyn CommandRunner) -> Result<String, VtexError> {
    runner.run(&["workspace", "list"]).await
}

/// `vtex use <name>`, optionally creating the workspace.
pub async fn use_workspace(
    runner: &dyn CommandRunner,
    name: &str,
    create: bool,
) -> Result<String, VtexError> {
    let output = if create {
        runner.run(&["use", name, "--create"]).await?
    } else {
        runner.run(&["use", name]).await?
    };
    reject_error_output(output)
}

/// `vtex workspace delete <name>`.
pub async fn delete_workspace(runner: &dyn CommandRunner, name: &str) -> Result<String, VtexError> {
    let output = runner.run(&["workspace", "delete", name]).await?;
    reject_error_output(output)
}

/// `vtex switch <account>`.
pub async fn switch_account(runner: &dyn CommandRunner, account: &str) -> Result<String, VtexError> {
    let output = runner.run(&["switch", account]).await?;
    reject_error_output(output)
}

/// The CLI exits zero on some failures and just prints the error, so
/// mutating operations also screen the output text.
fn reject_error_output(output: String) -> Result<String, VtexError> {
    let lower = output.to_lowercase();
    if lower.contains("error") || lower.contains("failed") {
        return Err(VtexError::CommandFailed(output.trim().to_string()));
    }
    Ok(output)
}
