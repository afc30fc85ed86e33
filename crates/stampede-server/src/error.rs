use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub const VALIDATION_ERROR_MESSAGE: &str = "Input validation error";

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    validation_errors: Option<Vec<String>>,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_errors: Option<Vec<String>>,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            validation_errors: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: VALIDATION_ERROR_MESSAGE.to_string(),
            validation_errors: Some(errors),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            message: self.message,
            validation_errors: self.validation_errors,
        });
        (self.status, body).into_response()
    }
}

impl From<config_plane::ConfigError> for AppError {
    fn from(err: config_plane::ConfigError) -> Self {
        match err {
            config_plane::ConfigError::Validation(errors) => AppError::validation(errors),
            other => AppError::internal(other.to_string()),
        }
    }
}

impl From<config_plane::RepositoryError> for AppError {
    fn from(err: config_plane::RepositoryError) -> Self {
        AppError::internal(err.to_string())
    }
}

impl From<config_plane::SettingsError> for AppError {
    fn from(err: config_plane::SettingsError) -> Self {
        AppError::bad_request(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::internal(err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status.as_str(), self.message)
    }
}

impl std::error::Error for AppError {}
