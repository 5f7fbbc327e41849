use crate::error::AppError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// Booking lifecycle. `Upcoming` is the only non-terminal state; all legal
/// transitions go through [`BookingStatus::transition`], never through a raw
/// column write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Validates a lifecycle transition. Terminal states accept nothing.
    pub fn transition(self, next: BookingStatus) -> Result<BookingStatus, AppError> {
        match (self, next) {
            (BookingStatus::Upcoming, BookingStatus::Cancelled) => Ok(BookingStatus::Cancelled),
            (BookingStatus::Upcoming, BookingStatus::Completed) => Ok(BookingStatus::Completed),
            (BookingStatus::Upcoming, BookingStatus::Upcoming) => {
                Err(AppError::Validation("booking is already upcoming".into()))
            }
            (from, _) => Err(AppError::AlreadyTerminal(from)),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStatus::Upcoming => "upcoming",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub station_id: String,
    pub vehicle_id: String,
    pub time_slot_id: String,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Everything the arbiter needs to convert an available slot into a booking.
/// `slot_capacity` only applies when the slot row does not exist yet.
pub struct BookingRequest {
    pub user_id: String,
    pub station_id: String,
    pub vehicle_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub slot_capacity: i64,
}

impl Booking {
    pub fn new(request: &BookingRequest, time_slot_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: request.user_id.clone(),
            station_id: request.station_id.clone(),
            vehicle_id: request.vehicle_id.clone(),
            time_slot_id,
            booking_date: request.date,
            booking_time: request.start_time,
            status: BookingStatus::Upcoming,
            created_at: Utc::now(),
        }
    }
}
