use crate::domain::{models::time_slot::TimeSlot, ports::SlotRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteSlotRepo {
    pool: SqlitePool,
}

impl SqliteSlotRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for SqliteSlotRepo {
    async fn list_by_station_date(
        &self,
        station_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, AppError> {
        sqlx::query_as::<_, TimeSlot>(
            "SELECT * FROM time_slots WHERE station_id = ? AND date = ? ORDER BY start_time ASC",
        )
        .bind(station_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
