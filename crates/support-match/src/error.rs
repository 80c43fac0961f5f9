use crate::config::ConfigError;
use crate::profile::IntakeError;
use crate::recommendations::{RecommendationError, RecommenderError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Recommendation(RecommendationError),
    Recommender(RecommenderError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Json(err) => write!(f, "invalid profile json: {}", err),
            AppError::Recommendation(err) => write!(f, "recommendation error: {}", err),
            AppError::Recommender(err) => write!(f, "remote recommender error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Recommendation(err) => Some(err),
            AppError::Recommender(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Recommendation(RecommendationError::Incomplete(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Recommendation(
                RecommendationError::UnknownResource(_) | RecommendationError::NotMatched(_),
            ) => StatusCode::NOT_FOUND,
            AppError::Recommender(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<RecommendationError> for AppError {
    fn from(value: RecommendationError) -> Self {
        Self::Recommendation(value)
    }
}

impl From<IntakeError> for AppError {
    fn from(value: IntakeError) -> Self {
        Self::Recommendation(RecommendationError::Incomplete(value))
    }
}

impl From<RecommenderError> for AppError {
    fn from(value: RecommenderError) -> Self {
        Self::Recommender(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileSection;

    #[test]
    fn maps_domain_errors_to_statuses() {
        let incomplete: AppError = IntakeError::Incomplete(vec![ProfileSection::Needs]).into();
        assert_eq!(
            incomplete.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let unknown: AppError = RecommendationError::UnknownResource("x".to_string()).into();
        assert_eq!(unknown.into_response().status(), StatusCode::NOT_FOUND);

        let io: AppError = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert_eq!(io.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_names_the_layer() {
        let err: AppError = ConfigError::InvalidPort.into();
        assert_eq!(
            err.to_string(),
            "configuration error: APP_PORT must be a valid u16"
        );
    }
}
