//! The `arboquiz list-trees` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(catalog_path: Option<PathBuf>, format: String) -> Result<()> {
    let catalog = super::load_catalog(catalog_path.as_deref())?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(catalog.trees())?);
        }
        "table" => {
            use comfy_table::{Cell, Table};

            let mut table = Table::new();
            table.set_header(vec!["Nom français", "Genre", "Espèce", "Image"]);
            for tree in catalog.trees() {
                table.add_row(vec![
                    Cell::new(&tree.common_name),
                    Cell::new(&tree.genus),
                    Cell::new(&tree.species),
                    Cell::new(&tree.image_path),
                ]);
            }

            println!("Catalogue : {} ({} arbres)", catalog.name(), catalog.len());
            println!("{table}");
        }
        other => anyhow::bail!("unknown format: {other} (expected table or json)"),
    }

    Ok(())
}
