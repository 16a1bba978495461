use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace, warn};

use common::Catalog;

use crate::config::Settings;
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(bind_address: Option<String>, dist_dir: Option<PathBuf>) -> Result<()> {
    trace!("Entering serve function");
    info!("Aptitude report server starting up");

    let mut settings = Settings::load()?;
    if let Some(bind_address) = bind_address {
        settings.bind_address = bind_address;
    }
    if let Some(dist_dir) = dist_dir {
        settings.dist_dir = dist_dir;
    }
    debug!("Effective settings: {:?}", settings);

    if !settings.dist_dir.join("index.html").exists() {
        warn!(
            "No index.html in {}; build the frontend with `trunk build` first",
            settings.dist_dir.display()
        );
    }

    let state = AppState {
        catalog: Arc::new(Catalog::builtin()),
    };

    trace!("Creating application router");
    let app = create_router(
        state,
        &settings.dist_dir,
        Duration::from_secs(settings.request_timeout_secs),
    );
    debug!("Router created successfully");

    info!("Starting server on {}", settings.bind_address);
    let listener = match TcpListener::bind(&settings.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", settings.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", settings.bind_address, e);
            return Err(e.into());
        }
    };

    info!("Aptitude report available on http://{}", settings.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
