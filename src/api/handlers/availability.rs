use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::AvailabilityQuery;
use crate::api::dtos::responses::{AvailabilityResponse, SlotResponse};
use crate::domain::services::availability::annotate;
use crate::domain::services::slot_grid::generate_slots;
use crate::error::AppError;
use crate::state::AppState;
use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// One station day as the client sees it: the full grid with per-slot
/// occupancy. Past dates still render, every slot just comes back
/// unavailable.
pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    Path(station_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let station = state
        .station_repo
        .find_by_id(&station_id)
        .await?
        .ok_or(AppError::NotFound("Station not found".into()))?;

    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))?;

    let candidates = generate_slots(
        date,
        station.opening_time,
        station.closing_time,
        state.config.slot_duration_min,
    );

    let rows = state.slot_repo.list_by_station_date(&station.id, date).await?;

    let annotated = annotate(
        &candidates,
        &rows,
        Local::now().naive_local(),
        state.config.default_slot_capacity,
    );

    Ok(Json(AvailabilityResponse {
        station_id: station.id,
        date,
        slot_duration_min: state.config.slot_duration_min,
        slots: annotated.into_iter().map(SlotResponse::from).collect(),
    }))
}
