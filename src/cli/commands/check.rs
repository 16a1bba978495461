use anyhow::Result;
use std::path::Path;
use tracing::{debug, error, info};

use common::Catalog;

use crate::validation::{ensure_valid, load_catalog, CatalogError};

pub fn check(path: Option<&Path>) -> Result<()> {
    let catalog = match path {
        Some(path) => {
            info!("Checking catalog file {}", path.display());
            load_catalog(path)?
        }
        None => {
            info!("Checking builtin catalog");
            Catalog::builtin()
        }
    };
    debug!(
        "Catalog has {} citations and {} expandable topics",
        catalog.citations.len(),
        catalog.expandable_topics().count()
    );

    match ensure_valid(&catalog) {
        Ok(()) => {
            info!("Catalog is valid");
            Ok(())
        }
        Err(CatalogError::Invalid(issues)) => {
            for issue in &issues {
                error!("{}", issue);
            }
            Err(CatalogError::Invalid(issues).into())
        }
        Err(e) => Err(e.into()),
    }
}
