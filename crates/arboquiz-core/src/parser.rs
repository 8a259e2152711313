//! TOML tree-catalog parser.
//!
//! Loads catalogs from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::TreeCatalog;
use crate::model::TreeRecord;

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    #[serde(default)]
    catalog: TomlCatalogHeader,
    #[serde(default)]
    trees: Vec<TomlTree>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlCatalogHeader {
    // A free-form `description` key is accepted and ignored.
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct TomlTree {
    common_name: String,
    genus: String,
    species: String,
    #[serde(default)]
    image: String,
}

/// Parse a single TOML file into a `TreeCatalog`.
pub fn parse_catalog(path: &Path) -> Result<TreeCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `TreeCatalog` (useful for testing).
///
/// An unnamed catalog takes its name from the file stem. An empty tree list
/// is a hard error: the quiz cannot run against it.
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<TreeCatalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let name = if parsed.catalog.name.is_empty() {
        source_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        parsed.catalog.name
    };

    let trees: Vec<TreeRecord> = parsed
        .trees
        .into_iter()
        .map(|t| TreeRecord {
            common_name: t.common_name,
            genus: t.genus,
            species: t.species,
            image_path: t.image,
        })
        .collect();

    TreeCatalog::new(name, trees)
        .with_context(|| format!("invalid catalog: {}", source_path.display()))
}

/// Recursively load all `.toml` catalog files from a directory.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<TreeCatalog>> {
    let mut catalogs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            catalogs.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(catalogs)
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Common name of the offending tree (if applicable).
    pub tree: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for common issues.
///
/// All findings are non-fatal; an unusable catalog (empty) never parses in
/// the first place.
pub fn validate_catalog(catalog: &TreeCatalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate common names
    let mut seen_names = std::collections::HashSet::new();
    for tree in catalog.trees() {
        if !seen_names.insert(&tree.common_name) {
            warnings.push(ValidationWarning {
                tree: Some(tree.common_name.clone()),
                message: format!("duplicate common name: {}", tree.common_name),
            });
        }
    }

    // Blank taxonomy fields
    for tree in catalog.trees() {
        if tree.common_name.trim().is_empty() {
            warnings.push(ValidationWarning {
                tree: None,
                message: "tree has an empty common name".into(),
            });
        }
        if tree.genus.trim().is_empty() {
            warnings.push(ValidationWarning {
                tree: Some(tree.common_name.clone()),
                message: "genus is empty".into(),
            });
        }
        if tree.species.trim().is_empty() {
            warnings.push(ValidationWarning {
                tree: Some(tree.common_name.clone()),
                message: "species is empty".into(),
            });
        }
        if tree.image_path.trim().is_empty() {
            warnings.push(ValidationWarning {
                tree: Some(tree.common_name.clone()),
                message: "no image path; front ends will have nothing to display".into(),
            });
        }
    }

    // Shared genera are never asked for nor shown as hints by the engine
    let mut reported_genera = std::collections::HashSet::new();
    for tree in catalog.trees() {
        let multiplicity = catalog.genus_multiplicity(&tree.genus);
        if multiplicity > 1 && reported_genera.insert(&tree.genus) {
            warnings.push(ValidationWarning {
                tree: None,
                message: format!(
                    "genus '{}' is shared by {} trees; it will never be asked nor hinted",
                    tree.genus, multiplicity
                ),
            });
        }
    }

    warnings
}
