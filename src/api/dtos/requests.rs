use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateStationRequest {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub opening_time: String,
    pub closing_time: String,
}

#[derive(Deserialize)]
pub struct CreateVehicleRequest {
    pub make: String,
    pub model: String,
    pub name: Option<String>,
    pub license_plate: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub station_id: String,
    pub vehicle_id: String,
    pub date: String,
    pub time: String,
}

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub date: String,
}
