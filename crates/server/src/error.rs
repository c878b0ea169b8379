use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pipeline::NoRecommendation;
use serde_json::json;

/// Errors surfaced by the HTTP layer
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    NoRecommendation(#[from] NoRecommendation),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoRecommendation(NoRecommendation::DataUnavailable(_)) => {
                StatusCode::BAD_GATEWAY
            }
            ApiError::NoRecommendation(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            ApiError::NoRecommendation(outcome) => outcome.reason(),
            ApiError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
            "reason": self.reason(),
        }));

        (self.status(), body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
