//! Diagram command implementation

use std::path::PathBuf;

use anyhow::bail;

use crate::cli::output::Output;
use crate::core::diagram::{render_diagram, Direction};
use crate::core::manifest::AppManifest;

/// Print a Mermaid dependency diagram for the given apps.
///
/// Each path is a `manifest.json` file or a directory containing one. With
/// no paths, the current directory is used.
pub fn run_diagram(paths: &[PathBuf], direction: Direction) -> anyhow::Result<()> {
    let manifests = load_manifests(paths)?;

    match render_diagram(direction, &manifests) {
        Some(doc) => {
            println!("{doc}");
            Ok(())
        }
        None => {
            Output::info("No dependencies found between the given apps.");
            Output::info("Pass two or more app directories that depend on each other.");
            for manifest in &manifests {
                println!("  loaded: {}", manifest.app_id());
            }
            Ok(())
        }
    }
}

/// Load manifests from the given paths, warning about unreadable ones.
pub fn load_manifests(paths: &[PathBuf]) -> anyhow::Result<Vec<AppManifest>> {
    let default = [PathBuf::from(".")];
    let paths: &[PathBuf] = if paths.is_empty() { &default } else { paths };

    let mut manifests = Vec::new();
    for path in paths {
        match AppManifest::load(path) {
            Ok(manifest) => manifests.push(manifest),
            Err(e) => Output::warning(&format!("Skipping {}: {}", path.display(), e)),
        }
    }

    if manifests.is_empty() {
        bail!("No readable manifest.json found in the given paths");
    }
    Ok(manifests)
}
