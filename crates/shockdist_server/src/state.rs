use shockdist_core::Baseline;
use shockdist_core::model::MarkerCatalog;
use std::sync::Arc;

/// Shared, read-only application state.
///
/// The baseline is computed once at startup; requests only read it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub baseline: Arc<Baseline>,
    pub catalog: Arc<MarkerCatalog>,
}

impl AppState {
    pub fn new(baseline: Baseline, catalog: MarkerCatalog) -> Self {
        Self {
            baseline: Arc::new(baseline),
            catalog: Arc::new(catalog),
        }
    }
}
