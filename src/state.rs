use crate::config::Config;
use crate::domain::ports::{
    BookingRepository, SlotRepository, StationRepository, VehicleRepository,
};
use crate::infra::changes::ChangeFeed;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub station_repo: Arc<dyn StationRepository>,
    pub vehicle_repo: Arc<dyn VehicleRepository>,
    pub slot_repo: Arc<dyn SlotRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub changes: ChangeFeed,
}
