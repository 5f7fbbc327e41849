use crate::domain::models::{
    booking::{Booking, BookingRequest},
    station::Station,
    time_slot::TimeSlot,
    vehicle::Vehicle,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

#[async_trait]
pub trait StationRepository: Send + Sync {
    async fn create(&self, station: &Station) -> Result<Station, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Station>, AppError>;
    async fn list_active(&self) -> Result<Vec<Station>, AppError>;
}

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Vehicle>, AppError>;
    async fn delete(&self, user_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait SlotRepository: Send + Sync {
    async fn list_by_station_date(
        &self,
        station_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, AppError>;
}

/// The booking arbiter. `book`, `cancel` and `complete` each run as one
/// storage transaction; callers observe either the whole mutation or none of
/// it, and the slot's `booked_count` always equals its number of
/// non-cancelled bookings.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn book(&self, request: &BookingRequest) -> Result<Booking, AppError>;
    async fn cancel(&self, user_id: &str, booking_id: &str) -> Result<Booking, AppError>;
    async fn complete(&self, booking_id: &str) -> Result<Booking, AppError>;
    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn count_effective(&self, time_slot_id: &str) -> Result<i64, AppError>;
    async fn find_due_completion(
        &self,
        now: NaiveDateTime,
        limit: i64,
    ) -> Result<Vec<Booking>, AppError>;
}
