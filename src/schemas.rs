use common::Catalog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Content shipped with the frontend, kept for the health summary
    pub catalog: Arc<Catalog>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of report sections
    pub sections: usize,
    /// Number of registered citations
    pub citations: usize,
}
