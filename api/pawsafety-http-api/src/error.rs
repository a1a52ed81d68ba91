use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;

use crate::contact::ContactResponse;

pub const MISSING_FIELDS_MESSAGE: &str = "Name, email, and message are required fields.";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body.";
pub const DISPATCH_FAILED_MESSAGE: &str = "Failed to send email. Please try again later.";
pub const NOT_FOUND_MESSAGE: &str = "Route not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum ApiError {
    MissingRequiredFields,
    InvalidBody(String),
    Dispatch(String),
    NotFound,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            ApiError::MissingRequiredFields => {
                (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE, None)
            }
            ApiError::InvalidBody(detail) => {
                (StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE, Some(detail))
            }
            ApiError::Dispatch(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                DISPATCH_FAILED_MESSAGE,
                Some(detail),
            ),
            ApiError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE, None),
            ApiError::Internal(detail) => {
                error!("Unhandled error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE, None)
            }
        };
        let body = ContactResponse {
            success: false,
            message: message.to_string(),
            error,
        };
        (status, Json(body)).into_response()
    }
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}
