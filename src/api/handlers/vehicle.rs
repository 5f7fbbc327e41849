use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::CreateVehicleRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::vehicle::Vehicle;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn create_vehicle(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateVehicleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let vehicle = Vehicle::new(
        user_id,
        payload.make,
        payload.model,
        payload.name,
        payload.license_plate,
    );

    let created = state.vehicle_repo.create(&vehicle).await?;
    info!("Vehicle created: {}", created.id);
    Ok(Json(created))
}

pub async fn list_vehicles(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let vehicles = state.vehicle_repo.list_by_user(&user_id).await?;
    Ok(Json(vehicles))
}

pub async fn delete_vehicle(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(vehicle_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.vehicle_repo.delete(&user_id, &vehicle_id).await?;
    info!("Vehicle deleted: {}", vehicle_id);
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
