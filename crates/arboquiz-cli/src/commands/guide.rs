//! The `arboquiz guide` command.

use anyhow::Result;

use arboquiz_core::catalog::HELP_TEXT;

pub fn execute() -> Result<()> {
    println!("{HELP_TEXT}");
    Ok(())
}
