use std::sync::Arc;

use crate::catalog::CandidateCatalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; the engine reads `config.engine` per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable candidate source. Default: StaticCatalog (bundled or CATALOG_PATH).
    pub catalog: Arc<dyn CandidateCatalog>,
}
