use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::errors::AppError;

const STATUS_MIN: u16 = 200;
const STATUS_MAX: u16 = 599;

#[derive(Serialize, Debug, PartialEq)]
pub struct StatusMessage {
    pub message: u16,
}

// 204 and 304 are the only codes in range that must not carry a body.
pub fn simulate(code: u16) -> Result<(StatusCode, Option<StatusMessage>), AppError> {
    if !(STATUS_MIN..=STATUS_MAX).contains(&code) {
        return Err(AppError::InvalidArgument(format!(
            "status code must be between {} and {}",
            STATUS_MIN, STATUS_MAX
        )));
    }
    let status = StatusCode::from_u16(code)
        .map_err(|_| AppError::InvalidArgument(format!("invalid status code {}", code)))?;

    match code {
        204 | 304 => Ok((status, None)),
        _ => Ok((status, Some(StatusMessage { message: code }))),
    }
}

pub async fn return_status(code: web::Path<u16>) -> Result<HttpResponse, actix_web::Error> {
    let (status, body) = simulate(code.into_inner())?;
    Ok(match body {
        Some(message) => HttpResponse::build(status).json(message),
        None => HttpResponse::build(status).finish(),
    })
}
