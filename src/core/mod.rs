//! Core domain logic
//!
//! Pure functions and explicitly constructed objects, free of UI concerns.

pub mod cache;
pub mod diagram;
pub mod manifest;
pub mod session;
pub mod workspace;

pub use cache::{WorkspaceCache, WorkspaceCacheEntry};
pub use manifest::AppManifest;
pub use session::{SessionDir, VtexInfo};
pub use workspace::{parse_workspace_list, WorkspaceRecord};
