//! Subcommand implementations.

use std::path::Path;

use anyhow::Result;

use arboquiz_core::catalog::TreeCatalog;

pub mod guide;
pub mod init;
pub mod list_trees;
pub mod play;
pub mod validate;

/// Load the catalog at `path`, or the built-in one when no path is given.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<TreeCatalog> {
    match path {
        Some(p) => arboquiz_core::parser::parse_catalog(p),
        None => Ok(TreeCatalog::builtin()),
    }
}
