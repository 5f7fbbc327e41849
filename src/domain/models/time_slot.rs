use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A bookable time window at a station. Rows are keyed by the natural key
/// `(station_id, date, start_time)` and materialized lazily on first booking.
/// `booked_count` is mutated only by the booking transaction.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct TimeSlot {
    pub id: String,
    pub station_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity: i64,
    pub booked_count: i64,
    pub created_at: DateTime<Utc>,
}

impl TimeSlot {
    pub fn new(
        station_id: String,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        capacity: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            station_id,
            date,
            start_time,
            end_time,
            capacity,
            booked_count: 0,
            created_at: Utc::now(),
        }
    }
}
