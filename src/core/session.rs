//! VTEX session state readers
//!
//! The VTEX CLI records its login state in `~/.vtex/session`: the current
//! account in `session.json`, the current workspace in `workspace.json`, and
//! the logged-in accounts as the keys of `tokens.json`. A missing or
//! unreadable file is never an error here, just "no data".

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

const SESSION_FILE: &str = "session.json";
const WORKSPACE_FILE: &str = "workspace.json";
const TOKENS_FILE: &str = "tokens.json";

/// Current account and workspace, either of which may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VtexInfo {
    pub account: Option<String>,
    pub workspace: Option<String>,
}

/// Handle to the VTEX session directory.
pub struct SessionDir {
    root: PathBuf,
}

impl SessionDir {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The standard location, `~/.vtex/session`. `None` when the home
    /// directory cannot be resolved.
    pub fn default_dir() -> Option<Self> {
        dirs::home_dir().map(|home| Self::new(home.join(".vtex").join("session")))
    }

    /// Current account from `session.json`, field `account`.
    pub fn account(&self) -> Option<String> {
        read_string_field(&self.root.join(SESSION_FILE), "account")
    }

    /// Current workspace from `workspace.json`, field `currentWorkspace`.
    pub fn workspace(&self) -> Option<String> {
        read_string_field(&self.root.join(WORKSPACE_FILE), "currentWorkspace")
    }

    /// Names of all logged-in accounts: the top-level keys of `tokens.json`.
    pub fn available_accounts(&self) -> Vec<String> {
        let path = self.root.join(TOKENS_FILE);
        let Some(value) = read_json(&path) else {
            return Vec::new();
        };
        match value {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => {
                debug!(path = %path.display(), "tokens file is not an object");
                Vec::new()
            }
        }
    }

    pub fn info(&self) -> VtexInfo {
        VtexInfo {
            account: self.account(),
            workspace: self.workspace(),
        }
    }
}

fn read_json(path: &Path) -> Option<Value> {
    if !path.exists() {
        debug!(path = %path.display(), "session file does not exist");
        return None;
    }
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), "session file unreadable: {e}");
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(path = %path.display(), "session file is not valid JSON: {e}");
            None
        }
    }
}

fn read_string_field(path: &Path, field: &str) -> Option<String> {
    let value = read_json(path)?;
    match value.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => {
            debug!(path = %path.display(), field, "field missing or empty");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_dir_with(files: &[(&str, &str)]) -> (tempfile::TempDir, SessionDir) {
        let temp = tempfile::tempdir().unwrap();
        for (name, content) in files {
            fs::write(temp.path().join(name), content).unwrap();
        }
        let dir = SessionDir::new(temp.path().to_path_buf());
        (temp, dir)
    }

    #[test]
    fn test_reads_account_and_workspace() {
        let (_temp, dir) = session_dir_with(&[
            ("session.json", r#"{"account": "mystore", "token": "xyz"}"#),
            ("workspace.json", r#"{"currentWorkspace": "dev"}"#),
        ]);
        assert_eq!(dir.account().as_deref(), Some("mystore"));
        assert_eq!(dir.workspace().as_deref(), Some("dev"));
        assert_eq!(
            dir.info(),
            VtexInfo {
                account: Some("mystore".into()),
                workspace: Some("dev".into()),
            }
        );
    }

    #[test]
    fn test_missing_files_read_as_none() {
        let (_temp, dir) = session_dir_with(&[]);
        assert_eq!(dir.account(), None);
        assert_eq!(dir.workspace(), None);
        assert!(dir.available_accounts().is_empty());
    }

    #[test]
    fn test_missing_or_empty_fields_read_as_none() {
        let (_temp, dir) = session_dir_with(&[
            ("session.json", r#"{"token": "xyz"}"#),
            ("workspace.json", r#"{"currentWorkspace": ""}"#),
        ]);
        assert_eq!(dir.account(), None);
        assert_eq!(dir.workspace(), None);
    }

    #[test]
    fn test_malformed_json_reads_as_none() {
        let (_temp, dir) = session_dir_with(&[("session.json", "{broken")]);
        assert_eq!(dir.account(), None);
    }

    #[test]
    fn test_available_accounts_from_tokens() {
        let (_temp, dir) = session_dir_with(&[(
            "tokens.json",
            r#"{"storeone": "tok1", "storetwo": "tok2"}"#,
        )]);
        let mut accounts = dir.available_accounts();
        accounts.sort();
        assert_eq!(accounts, vec!["storeone", "storetwo"]);
    }
}
