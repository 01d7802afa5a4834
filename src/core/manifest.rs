//! VTEX app manifest model
//!
//! Every VTEX IO app carries a `manifest.json` with its vendor, name,
//! version, and dependency map. Only those fields matter here; the rest of
//! the manifest is ignored.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading an app manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The subset of a VTEX `manifest.json` used by diagrams and app commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppManifest {
    pub vendor: String,
    pub name: String,
    #[serde(default)]
    pub version: String,
    /// Dependency map `vendor.app -> version range`. BTreeMap keeps diagram
    /// output deterministic.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

impl AppManifest {
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a `manifest.json` path, or from `<dir>/manifest.json` when
    /// given a directory.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let file = if path.is_dir() {
            path.join("manifest.json")
        } else {
            path.to_path_buf()
        };
        let content = fs::read_to_string(file)?;
        Self::parse(&content)
    }

    /// Fully qualified app id, `vendor.name`.
    pub fn app_id(&self) -> String {
        format!("{}.{}", self.vendor, self.name)
    }

    /// App locator with version, `vendor.name@version`.
    pub fn app_locator(&self) -> String {
        format!("{}@{}", self.app_id(), self.version)
    }
}

/// Build a chained shell command applying `base` to every app, e.g.
/// `vtex install vendor.a@1.x && vtex install vendor.b@0.2.0`.
///
/// Returns `None` when there are no apps to act on.
pub fn apps_command(base: &str, manifests: &[AppManifest]) -> Option<String> {
    if manifests.is_empty() {
        return None;
    }
    Some(
        manifests
            .iter()
            .map(|m| format!("{} {}", base, m.app_locator()))
            .collect::<Vec<_>>()
            .join(" && "),
    )
}
