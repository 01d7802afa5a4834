//! Workspace-list parsing
//!
//! Turns the free-text table printed by `vtex workspace list` into structured
//! records. The CLI gives no schema guarantee, so parsing is best-effort: any
//! input yields an ordered list, possibly empty, and never an error. Callers
//! must treat an empty result as "nothing detected", not as proof that zero
//! workspaces exist.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One workspace row as reported by the VTEX CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRecord {
    /// Workspace name, unique within one account's list
    pub name: String,
    /// Marked with `*` in the CLI output
    pub is_active: bool,
    /// Production workspace (last column of the table)
    pub is_production: bool,
}

/// Matches a headerless data row: a workspace name followed by whitespace.
static NAME_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+\s").expect("hardcoded pattern must be valid"));

/// Parse the output of `vtex workspace list`.
///
/// Two strategies, tried in order:
/// 1. Header-based: locate the `Name ... Weight/Production` header line and
///    read the rows after it.
/// 2. Heuristic fallback: no header found (older or reformatted CLI output),
///    so classify each line on its own.
pub fn parse_workspace_list(output: &str) -> Vec<WorkspaceRecord> {
    if output.trim().is_empty() {
        debug!("empty workspace list output");
        return Vec::new();
    }

    let lines: Vec<&str> = output.trim().lines().collect();

    match find_header(&lines) {
        Some(idx) => {
            debug!(header_line = idx, "parsing workspace table rows");
            parse_table_rows(&lines[idx + 1..])
        }
        None => {
            debug!("no header line found, falling back to heuristic parsing");
            parse_heuristic(&lines)
        }
    }
}

/// Locate the table header: a line containing "Name" and either "Weight" or
/// "Production" (case-sensitive, substring match).
fn find_header(lines: &[&str]) -> Option<usize> {
    lines
        .iter()
        .position(|line| line.contains("Name") && (line.contains("Weight") || line.contains("Production")))
}

/// Parse the data rows following a recognized header line.
///
/// Rows look like `* dev    0    false`. The active marker `*` may stand
/// alone or be glued to the name (`*dev`); both conventions show up in the
/// wild and both are accepted.
fn parse_table_rows(lines: &[&str]) -> Vec<WorkspaceRecord> {
    let mut records = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 {
            continue;
        }

        let (name, is_active) = if parts[0] == "*" {
            (parts[1], true)
        } else if let Some(stripped) = parts[0].strip_prefix('*') {
            let stripped = stripped.trim();
            // A lone `*` token was already handled above; an empty remainder
            // here means odd spacing, so take the next token as the name.
            let name = if stripped.is_empty() { parts[1] } else { stripped };
            (name, true)
        } else {
            (parts[0], false)
        };

        let is_production = parts
            .last()
            .is_some_and(|last| last.eq_ignore_ascii_case("true"));

        records.push(WorkspaceRecord {
            name: name.to_string(),
            is_active,
            is_production,
        });
    }

    records
}

/// Permissive per-line fallback used when no header line is present.
///
/// Skips banner lines (`VTEX ...`) and anything error-looking; accepts
/// `* name ...` rows as the active workspace and bare `name ...` rows as
/// inactive ones. Production status is true iff any token equals "true".
fn parse_heuristic(lines: &[&str]) -> Vec<WorkspaceRecord> {
    let mut records = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with("VTEX") || line.contains("error") {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();

        if line.starts_with('*') {
            if parts.len() >= 2 {
                records.push(WorkspaceRecord {
                    name: parts[1].to_string(),
                    is_active: true,
                    is_production: any_token_true(&parts),
                });
            }
        } else if NAME_ROW.is_match(line) {
            records.push(WorkspaceRecord {
                name: parts[0].to_string(),
                is_active: false,
                is_production: any_token_true(&parts),
            });
        }
    }

    records
}

fn any_token_true(parts: &[&str]) -> bool {
    parts.iter().any(|part| part.eq_ignore_ascii_case("true"))
}
