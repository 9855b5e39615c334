use crate::assessment::{AssessmentServiceError, CatalogError, MbtiError, SessionStoreError};
use crate::config::ConfigError;
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
    Input(serde_json::Error),
    Catalog(CatalogError),
    Assessment(AssessmentServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Input(err) => write!(f, "invalid input: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Assessment(err) => write!(f, "assessment error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Input(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Assessment(err) => Some(err),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Assessment(AssessmentServiceError::Classification(_))
            | AppError::Assessment(AssessmentServiceError::Store(SessionStoreError::NotFound)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Assessment(AssessmentServiceError::Store(SessionStoreError::Conflict)) => {
                StatusCode::CONFLICT
            }
            AppError::Input(_) | AppError::Catalog(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Assessment(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
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
        Self::Input(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<AssessmentServiceError> for AppError {
    fn from(value: AssessmentServiceError) -> Self {
        Self::Assessment(value)
    }
}

impl From<MbtiError> for AppError {
    fn from(value: MbtiError) -> Self {
        Self::Assessment(AssessmentServiceError::Classification(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mbti_code_maps_to_not_found() {
        let err = AppError::from(MbtiError::NotFound {
            code: "ZZZZ".to_string(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("ZZZZ"));
    }

    #[test]
    fn malformed_input_maps_to_bad_request() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid");
        assert_eq!(AppError::from(parse_error).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_outage_maps_to_internal_error() {
        let err = AppError::from(AssessmentServiceError::Store(SessionStoreError::Unavailable(
            "offline".to_string(),
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
