use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::CreateStationRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::station::{NewStationParams, Station};
use crate::error::AppError;
use crate::state::AppState;
use chrono::NaiveTime;
use std::sync::Arc;
use tracing::info;

pub async fn create_station(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateStationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let opening_time = NaiveTime::parse_from_str(&payload.opening_time, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid opening_time format (HH:MM)".into()))?;
    let closing_time = NaiveTime::parse_from_str(&payload.closing_time, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid closing_time format (HH:MM)".into()))?;

    if opening_time >= closing_time {
        return Err(AppError::Validation(
            "opening_time must be before closing_time".into(),
        ));
    }

    let station = Station::new(NewStationParams {
        name: payload.name,
        address: payload.address,
        city: payload.city,
        state: payload.state,
        opening_time,
        closing_time,
        created_by: user_id,
    });

    let created = state.station_repo.create(&station).await?;
    info!("Station created: {}", created.id);
    Ok(Json(created))
}

pub async fn list_stations(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let stations = state.station_repo.list_active().await?;
    Ok(Json(stations))
}

pub async fn get_station(
    State(state): State<Arc<AppState>>,
    Path(station_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let station = state
        .station_repo
        .find_by_id(&station_id)
        .await?
        .ok_or(AppError::NotFound("Station not found".into()))?;
    Ok(Json(station))
}
