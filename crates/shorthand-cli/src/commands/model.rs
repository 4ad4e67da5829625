//! `shorthand model` -- export and import trained models.
//!
//! Both directions work offline; no API key is needed.

use std::path::Path;

use anyhow::anyhow;

use shorthand_llm::{export_model, import_model};
use shorthand_types::ShorthandSystem;
use shorthand_types::config::Config;

use super::require;

/// Write the exported model for `system` to `output`, or stdout.
pub fn export(
    system: Option<ShorthandSystem>,
    output: Option<&Path>,
    config: &Config,
) -> anyhow::Result<()> {
    let system = system.unwrap_or(config.defaults.system);
    let json = export_model(system).to_json()?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .map_err(|e| anyhow!("failed to write {}: {e}", path.display()))?;
            eprintln!("Model exported to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Import a model previously written by [`export`].
pub fn import(file: &Path) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(file)
        .map_err(|e| anyhow!("failed to read {}: {e}", file.display()))?;
    let imported = require(import_model(&contents))?;
    println!(
        "Imported {} model (version {})",
        imported.system.info().name,
        imported.version
    );
    Ok(())
}
