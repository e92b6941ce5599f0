use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use shockdist_core::error::{DatasetError, PipelineError, ShockSpecError};

/// Custom error types for the shockdist API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid shock specification: {0}")]
    InvalidShockSpec(#[from] ShockSpecError),

    #[error("Cannot compute distribution for this configuration: {0}")]
    InvalidDataset(#[from] DatasetError),

    #[error("Internal server error")]
    InternalError,
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::InvalidDataset(e) => ApiError::InvalidDataset(e),
            PipelineError::InvalidShockSpec(e) => ApiError::InvalidShockSpec(e),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        tracing::error!(error = %err, "pipeline task failed");
        ApiError::InternalError
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidShockSpec(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidDataset(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Helper type for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use shockdist_core::model::SectorId;

    #[test]
    fn test_status_mapping() {
        let spec = ApiError::from(ShockSpecError::MissingFactor { sector: SectorId(1) });
        assert_eq!(spec.status(), StatusCode::BAD_REQUEST);

        let dataset = ApiError::from(PipelineError::InvalidDataset(
            DatasetError::DegenerateIncome,
        ));
        assert_eq!(dataset.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(
            dataset
                .to_string()
                .starts_with("Cannot compute distribution for this configuration")
        );

        assert_eq!(
            ApiError::InternalError.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
