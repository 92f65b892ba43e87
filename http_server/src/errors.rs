use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;
use use_cases::authentication::AuthenticationError;
use use_cases::create_location::CreateLocationError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Validation failed")]
    ValidationFailed(HashMap<String, String>),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    SlugGenerationFailed(String),
    #[error("Internal server error")]
    InternalServerError(#[from] anyhow::Error),
}

impl From<AuthenticationError> for ApiError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::Validation(fields) => ApiError::ValidationFailed(fields),
            AuthenticationError::Internal(err) => ApiError::InternalServerError(err),
        }
    }
}

impl From<CreateLocationError> for ApiError {
    fn from(err: CreateLocationError) -> Self {
        match err {
            CreateLocationError::Validation(fields) => ApiError::ValidationFailed(fields),
            CreateLocationError::DuplicateName | CreateLocationError::SlugConflict => {
                ApiError::Conflict(err.to_string())
            }
            CreateLocationError::SlugGenerationExhausted => {
                ApiError::SlugGenerationFailed(err.to_string())
            }
            CreateLocationError::InternalError(err) => ApiError::InternalServerError(err),
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::SlugGenerationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let err_json = match self {
            ApiError::ValidationFailed(fields) => {
                let mut messages = fields
                    .iter()
                    .map(|(field, message)| format!("{field}: {message}"))
                    .collect::<Vec<_>>();
                messages.sort();
                json!({ "error": messages.join("; "), "data": fields })
            }
            _ => json!({ "error": self.to_string() }),
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(err_json)
    }
}
