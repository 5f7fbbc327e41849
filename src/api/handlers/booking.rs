use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::CreateBookingRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::booking::BookingRequest;
use crate::domain::services::slot_grid::generate_slots;
use crate::error::AppError;
use crate::infra::changes::ChangeOp;
use crate::state::AppState;
use chrono::{Local, NaiveDate, NaiveTime};
use std::sync::Arc;
use tracing::info;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))?;
    let start_time = NaiveTime::parse_from_str(&payload.time, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid time format (HH:MM)".into()))?;

    let station = state
        .station_repo
        .find_by_id(&payload.station_id)
        .await?
        .ok_or(AppError::NotFound("Station not found".into()))?;

    if !station.is_active {
        return Err(AppError::Validation(
            "Station is not accepting bookings".into(),
        ));
    }

    let vehicle = state
        .vehicle_repo
        .find_by_id(&payload.vehicle_id)
        .await?
        .ok_or(AppError::NotFound("Vehicle not found".into()))?;

    if vehicle.user_id != user_id {
        return Err(AppError::Forbidden(
            "Vehicle belongs to another user".into(),
        ));
    }

    // The requested time must sit on the station's slot grid; arbitrary
    // times are rejected before the store is touched.
    let grid = generate_slots(
        date,
        station.opening_time,
        station.closing_time,
        state.config.slot_duration_min,
    );
    let candidate = grid
        .iter()
        .find(|slot| slot.start_time == start_time)
        .ok_or_else(|| {
            AppError::Validation("Requested time is not on the station's slot grid".into())
        })?;

    if date.and_time(start_time) < Local::now().naive_local() {
        return Err(AppError::Validation("Cannot book a slot in the past".into()));
    }

    let request = BookingRequest {
        user_id,
        station_id: station.id.clone(),
        vehicle_id: vehicle.id.clone(),
        date,
        start_time,
        end_time: candidate.end_time,
        slot_capacity: state.config.default_slot_capacity,
    };

    // Capacity and duplicate checks happen inside the booking transaction;
    // everything above is fail-fast validation only.
    let created = state.booking_repo.book(&request).await?;

    state.changes.publish("bookings", &created.id, ChangeOp::Insert);
    state
        .changes
        .publish("time_slots", &created.time_slot_id, ChangeOp::Update);

    info!("Booking confirmed: {} at station {}", created.id, station.id);
    Ok(Json(created))
}

pub async fn list_my_bookings(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list_by_user(&user_id).await?;
    Ok(Json(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .find_by_id(&user_id, &booking_id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let cancelled = state.booking_repo.cancel(&user_id, &booking_id).await?;

    state.changes.publish("bookings", &cancelled.id, ChangeOp::Update);
    state
        .changes
        .publish("time_slots", &cancelled.time_slot_id, ChangeOp::Update);

    info!("Booking cancelled: {}", cancelled.id);
    Ok(Json(cancelled))
}

pub async fn complete_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    // Ownership check first; completion itself is not user-scoped because
    // the background sweeper uses the same operation.
    state
        .booking_repo
        .find_by_id(&user_id, &booking_id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    let completed = state.booking_repo.complete(&booking_id).await?;

    state.changes.publish("bookings", &completed.id, ChangeOp::Update);

    info!("Booking completed: {}", completed.id);
    Ok(Json(completed))
}
