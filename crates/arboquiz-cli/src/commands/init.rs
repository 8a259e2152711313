//! The `arboquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("arbres.toml").exists() {
        println!("arbres.toml already exists, skipping.");
    } else {
        std::fs::write("arbres.toml", STARTER_CATALOG)?;
        println!("Created arbres.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit arbres.toml and add your own trees");
    println!("  2. Run: arboquiz validate --catalog arbres.toml");
    println!("  3. Run: arboquiz play --catalog arbres.toml");

    Ok(())
}

const STARTER_CATALOG: &str = r#"[catalog]
name = "Mon catalogue d'arbres"
description = "Catalogue de départ, remplacez ces arbres par les vôtres"

[[trees]]
common_name = "Chêne pédonculé"
genus = "Quercus"
species = "robur"
image = "images/chene.jpg"

[[trees]]
common_name = "Hêtre"
genus = "Fagus"
species = "sylvatica"
image = "images/hetre.jpg"

[[trees]]
common_name = "Pin sylvestre"
genus = "Pinus"
species = "sylvestris"
image = "images/pin.jpg"
"#;
