use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Conflict(String),
    Validation(ValidationErrors),
    InvalidArgument(String),
    BadGateway(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorDetail {
    detail: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation Failed: {}", errors),
            AppError::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            AppError::BadGateway(msg) => write!(f, "Bad Gateway: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(msg) => HttpResponse::NotFound().json(ErrorDetail { detail: msg.clone() }),
            // the resource contract reports duplicate email as 403, not 409
            AppError::Conflict(msg) => HttpResponse::Forbidden().json(ErrorDetail { detail: msg.clone() }),
            AppError::Validation(errors) => HttpResponse::UnprocessableEntity().json(json!({ "detail": errors })),
            AppError::InvalidArgument(msg) => HttpResponse::UnprocessableEntity().json(ErrorDetail { detail: msg.clone() }),
            AppError::BadGateway(msg) => HttpResponse::BadGateway().json(ErrorDetail { detail: msg.clone() }),
            AppError::Internal(msg) => HttpResponse::InternalServerError().json(ErrorDetail { detail: msg.clone() }),
        }
    }
}
