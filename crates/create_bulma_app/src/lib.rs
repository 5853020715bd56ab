//! Project scaffolding for Leptos + Bulma applications.
//!
//! `create-bulma-app` copies a registered template directory, renames the package, pins the
//! `bulma_*` dependencies, and writes the chosen class prefix into the generated `bulma.toml`.

#![warn(missing_docs)]

pub mod cli;
pub mod error;
pub mod registry;
pub mod scaffold;

use std::path::{Path, PathBuf};

pub use cli::{Command, CreateOptions};
pub use error::{ScaffoldError, ScaffoldResult};
pub use registry::{TemplateEntry, TemplateRegistry};
pub use scaffold::{run, ScaffoldReport};

/// Templates shipped alongside this crate in the workspace.
pub fn bundled_templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

/// Resolve the templates directory for a command, preferring an explicit override.
pub fn templates_dir(override_dir: Option<&Path>) -> PathBuf {
    override_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(bundled_templates_dir)
}
