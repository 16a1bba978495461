#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use common::Catalog;
    use std::path::Path;
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body><div id=\"app\"></div></body></html>";
    pub const BUNDLE_JS: &str = "export default function init() {}";

    pub fn setup_test_app_state() -> AppState {
        AppState {
            catalog: Arc::new(Catalog::builtin()),
        }
    }

    /// Temporary dist directory with an index page and one asset.
    pub fn setup_dist_dir() -> TempDir {
        let dir = tempfile::tempdir().expect("Failed to create temp dist dir");
        std::fs::write(dir.path().join("index.html"), INDEX_HTML)
            .expect("Failed to write index.html");
        std::fs::write(dir.path().join("frontend.js"), BUNDLE_JS)
            .expect("Failed to write frontend.js");
        dir
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The level comes from RUST_LOG and defaults to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app(dist_dir: &Path) -> Router {
        let _guard = init_test_tracing();
        create_router(setup_test_app_state(), dist_dir, Duration::from_secs(5))
    }
}
