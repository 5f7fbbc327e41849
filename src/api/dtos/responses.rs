use crate::domain::services::availability::AnnotatedSlot;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
pub struct SlotResponse {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub capacity: i64,
    pub booked_count: i64,
    pub available: bool,
}

impl From<AnnotatedSlot> for SlotResponse {
    fn from(slot: AnnotatedSlot) -> Self {
        Self {
            date: slot.date,
            start_time: slot.start_time.format("%H:%M").to_string(),
            end_time: slot.end_time.format("%H:%M").to_string(),
            capacity: slot.capacity,
            booked_count: slot.booked_count,
            available: slot.available,
        }
    }
}

#[derive(Serialize)]
pub struct AvailabilityResponse {
    pub station_id: String,
    pub date: NaiveDate,
    pub slot_duration_min: u32,
    pub slots: Vec<SlotResponse>,
}
