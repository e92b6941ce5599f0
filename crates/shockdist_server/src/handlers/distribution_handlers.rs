use axum::{Json, extract::State};

use crate::error::ApiResult;
use crate::models::{BaselineResponse, ComputeRequest, HealthResponse};
use crate::state::AppState;
use crate::validation;
use shockdist_core::compute_result_with;
use shockdist_core::indicators::{IndicatorComparison, indicators_for_shock};
use shockdist_core::model::{MarkerCatalog, ResultBundle};

// ============================================================================
// Read-only Handlers
// ============================================================================

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn get_baseline(State(state): State<AppState>) -> Json<BaselineResponse> {
    let baseline = &state.baseline;
    Json(BaselineResponse {
        records: baseline.dataset().len(),
        sectors: baseline.dataset().sectors(),
        grid_points: baseline.grid().len(),
        bandwidth_rule: baseline.rule(),
        bandwidth: baseline.bandwidth(),
        original: baseline.original().clone(),
    })
}

pub async fn get_markers(State(state): State<AppState>) -> Json<MarkerCatalog> {
    Json(state.catalog.as_ref().clone())
}

// ============================================================================
// Pipeline Handlers
// ============================================================================

pub async fn compute_distribution(
    State(state): State<AppState>,
    Json(req): Json<ComputeRequest>,
) -> ApiResult<Json<ResultBundle>> {
    let sectors = state.baseline.dataset().sectors();
    let (spec, lines) = validation::validate_compute_request(&req, &sectors)?;

    tracing::info!(
        shocked_sectors = spec.len(),
        markers = lines.len(),
        "computing shocked distribution"
    );

    // KDE evaluation is CPU bound
    let bundle = tokio::task::spawn_blocking(move || {
        compute_result_with(&state.baseline, &state.catalog, &spec, &lines)
    })
    .await??;

    Ok(Json(bundle))
}

pub async fn compute_indicators(
    State(state): State<AppState>,
    Json(req): Json<ComputeRequest>,
) -> ApiResult<Json<IndicatorComparison>> {
    let sectors = state.baseline.dataset().sectors();
    let (spec, _) = validation::validate_compute_request(&req, &sectors)?;

    let comparison = tokio::task::spawn_blocking(move || {
        indicators_for_shock(&state.baseline, &state.catalog, &spec)
    })
    .await?;

    Ok(Json(comparison))
}
