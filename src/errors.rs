use actix_web::{error::ResponseError, HttpResponse};
use derive_more::Display;
use serde_json::json;

use crate::validation::FieldError;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "Validation error: {}", message)]
    Validation {
        message: String,
        details: Vec<FieldError>,
    },

    #[display(fmt = "External API failed: {}", _0)]
    ExternalApi(String),

    #[display(fmt = "Not found: {}", _0)]
    NotFound(String),

    #[display(fmt = "Internal server error: {}", _0)]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>, details: Vec<FieldError>) -> Self {
        ApiError::Validation {
            message: message.into(),
            details,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        log::error!("Anyhow error: {}", error);
        ApiError::Internal("Unexpected server error".to_string())
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation {
                ref message,
                ref details,
            } => HttpResponse::BadRequest().json(json!({
                "error": "ValidationError",
                "message": message,
                "details": details,
            })),
            ApiError::ExternalApi(ref message) => HttpResponse::BadGateway().json(json!({
                "error": "ExternalApiError",
                "message": format!("External API failed: {}", message),
            })),
            ApiError::NotFound(ref message) => HttpResponse::NotFound().json(json!({
                "error": "NotFound",
                "message": message,
            })),
            ApiError::Internal(ref message) => HttpResponse::InternalServerError().json(json!({
                "error": "InternalServerError",
                "message": message,
            })),
        }
    }
}
