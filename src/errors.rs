use actix_web::{
    HttpRequest, HttpResponse, ResponseError,
    error::{JsonPayloadError, PathError},
    http::StatusCode,
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// Unified error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbError(#[from] DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Content-Type must be application/json")]
    UnsupportedMediaType,

    #[error("Internal server error")]
    Internal,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DbError(_) | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = ErrorResponse {
            status: status.as_u16(),
            error: status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
            message: self.to_string(),
        };
        HttpResponse::build(status).json(body)
    }
}

/// Maps JSON extractor failures onto the unified error body.
/// A wrong Content-Type becomes 415; everything else is a 400.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let app_error = match err {
        JsonPayloadError::ContentType => AppError::UnsupportedMediaType,
        other => AppError::InvalidInput(other.to_string()),
    };
    app_error.into()
}

/// Non-numeric ids in the path become a 400 with the same body shape.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidInput(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidInput("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnsupportedMediaType.status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            AppError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_body_is_structured() {
        let err = AppError::NotFound("Account with id 7 not found".into());
        let body = ErrorResponse {
            status: err.status_code().as_u16(),
            error: err.status_code().canonical_reason().unwrap().to_string(),
            message: err.to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["error"], "Not Found");
        assert!(json["message"].as_str().unwrap().contains("id 7"));
    }
}
