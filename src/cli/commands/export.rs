use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use common::Catalog;

use crate::cli::ExportFormat;

/// Serializes `catalog` in the requested format.
pub fn render_catalog(catalog: &Catalog, format: ExportFormat) -> Result<String> {
    let rendered = match format {
        ExportFormat::Json => serde_json::to_string_pretty(catalog)?,
        ExportFormat::Yaml => serde_yaml::to_string(catalog)?,
    };
    Ok(rendered)
}

pub fn export(format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let catalog = Catalog::builtin();
    let rendered = render_catalog(&catalog, format)?;
    debug!("Rendered catalog as {:?} ({} bytes)", format, rendered.len());

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Catalog exported to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
