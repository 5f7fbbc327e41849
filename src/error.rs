use crate::domain::models::booking::BookingStatus;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("storage unavailable: {0}")]
    Database(#[from] sqlx::Error),
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("time slot is fully booked")]
    SlotFull,
    #[error("vehicle already has an active booking for this slot")]
    DuplicateBooking,
    #[error("vehicle has booking history")]
    VehicleInUse,
    #[error("booking is already {0}")]
    AlreadyTerminal(BookingStatus),
    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORE_UNAVAILABLE",
                    "Storage temporarily unavailable. The request was not committed and is safe to retry.".to_string(),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Unauthorized".to_string(),
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone()),
            AppError::SlotFull => (
                StatusCode::CONFLICT,
                "SLOT_FULL",
                "This time slot is fully booked. Please pick another slot.".to_string(),
            ),
            AppError::DuplicateBooking => (
                StatusCode::CONFLICT,
                "DUPLICATE_BOOKING",
                "This vehicle already has an active booking for this slot.".to_string(),
            ),
            AppError::VehicleInUse => (
                StatusCode::CONFLICT,
                "VEHICLE_IN_USE",
                "This vehicle has booking history and cannot be deleted.".to_string(),
            ),
            AppError::AlreadyTerminal(state) => (
                StatusCode::CONFLICT,
                "ALREADY_TERMINAL",
                format!("This booking is already {} and can no longer change.", state),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL",
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}
