//! Dependency diagram generation
//!
//! Builds a Mermaid graph out of a set of app manifests. Only edges between
//! apps in the given set are drawn; dependencies on apps outside it (the
//! whole VTEX platform, ultimately) would drown the diagram.

use std::fmt;

use crate::core::manifest::AppManifest;

/// Mermaid graph orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Top to bottom (`graph TB`)
    #[default]
    TopBottom,
    /// Left to right (`graph LR`)
    LeftRight,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::TopBottom => write!(f, "TB"),
            Direction::LeftRight => write!(f, "LR"),
        }
    }
}

/// Mermaid edge block for one app, with its edge count for sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    pub edges: String,
    pub edge_count: usize,
}

/// Edges from `app` to every dependency that is itself in `all`.
///
/// Returns `None` when the app declares no dependencies at all; an app whose
/// dependencies all point outside the set yields an empty block.
pub fn dependency_edges(app: &AppManifest, all: &[AppManifest]) -> Option<DependencyGraph> {
    if app.dependencies.is_empty() {
        return None;
    }

    let app_id = app.app_id();
    let mut edges = String::new();
    let mut edge_count = 0;

    for dep in app.dependencies.keys() {
        if !all.iter().any(|m| m.app_id() == *dep) {
            continue;
        }
        edges.push_str(&format!("{} --> {}\n", app_id, dep));
        edge_count += 1;
    }

    Some(DependencyGraph { edges, edge_count })
}

/// Concatenate edge blocks, most-depended-first, so the busiest apps sit at
/// the top of the rendered diagram.
pub fn sort_by_frequency(mut graphs: Vec<DependencyGraph>) -> String {
    graphs.sort_by(|a, b| b.edge_count.cmp(&a.edge_count));
    graphs.into_iter().map(|g| g.edges).collect()
}

/// Render a complete Mermaid document for the given manifests, or `None`
/// when no dependencies exist between them.
pub fn render_diagram(direction: Direction, manifests: &[AppManifest]) -> Option<String> {
    let graphs: Vec<DependencyGraph> = manifests
        .iter()
        .filter_map(|m| dependency_edges(m, manifests))
        .collect();

    let edges = sort_by_frequency(graphs);
    if edges.is_empty() {
        return None;
    }
    Some(format!("graph {}\n{}", direction, edges))
}
