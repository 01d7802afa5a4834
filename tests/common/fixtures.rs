//! Test fixtures for fake VTEX session directories and app manifests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use vtexctl::core::session::SessionDir;

/// A fake `~/.vtex/session` directory, cleaned up on drop.
pub struct SessionFixture {
    pub temp: TempDir,
}

impl SessionFixture {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Write `session.json` with the given account.
    pub fn with_account(self, account: &str) -> Self {
        self.write_file("session.json", &format!(r#"{{"account": "{account}"}}"#));
        self
    }

    /// Write `workspace.json` with the given current workspace.
    pub fn with_workspace(self, workspace: &str) -> Self {
        self.write_file(
            "workspace.json",
            &format!(r#"{{"currentWorkspace": "{workspace}"}}"#),
        );
        self
    }

    /// Write `tokens.json` with the given account names as keys.
    pub fn with_tokens(self, accounts: &[&str]) -> Self {
        let entries: Vec<String> = accounts
            .iter()
            .map(|a| format!(r#""{a}": "token-{a}""#))
            .collect();
        self.write_file("tokens.json", &format!("{{{}}}", entries.join(",")));
        self
    }

    pub fn session_dir(&self) -> SessionDir {
        SessionDir::new(self.temp.path().to_path_buf())
    }

    fn write_file(&self, name: &str, content: &str) {
        fs::write(self.temp.path().join(name), content).expect("failed to write session file");
    }
}

impl Default for SessionFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a VTEX app manifest under `root/<name>/manifest.json` and return the
/// app directory.
pub fn write_app_manifest(
    root: &Path,
    vendor: &str,
    name: &str,
    version: &str,
    deps: &[&str],
) -> PathBuf {
    let app_dir = root.join(name);
    fs::create_dir_all(&app_dir).expect("failed to create app dir");

    let deps_json: Vec<String> = deps.iter().map(|d| format!(r#""{d}": "1.x""#)).collect();
    let manifest = format!(
        r#"{{"vendor": "{vendor}", "name": "{name}", "version": "{version}", "dependencies": {{{}}}}}"#,
        deps_json.join(",")
    );
    fs::write(app_dir.join("manifest.json"), manifest).expect("failed to write manifest");
    app_dir
}
