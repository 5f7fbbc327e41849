use crate::domain::models::{
    booking::{Booking, BookingRequest, BookingStatus},
    time_slot::TimeSlot,
};
use crate::domain::ports::BookingRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::SqlitePool;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn book(&self, request: &BookingRequest) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // The upsert is deliberately the first statement: it takes the write
        // lock up front, so concurrent bookers of the same slot queue on the
        // busy timeout instead of failing a read-to-write lock upgrade. If a
        // racing transaction created the row first, DO NOTHING lets us fall
        // through to their row.
        let fresh = TimeSlot::new(
            request.station_id.clone(),
            request.date,
            request.start_time,
            request.end_time,
            request.slot_capacity,
        );
        sqlx::query(
            "INSERT INTO time_slots (id, station_id, date, start_time, end_time, capacity, booked_count, created_at)
             VALUES (?, ?, ?, ?, ?, ?, 0, ?)
             ON CONFLICT(station_id, date, start_time) DO NOTHING",
        )
        .bind(&fresh.id)
        .bind(&fresh.station_id)
        .bind(fresh.date)
        .bind(fresh.start_time)
        .bind(fresh.end_time)
        .bind(fresh.capacity)
        .bind(fresh.created_at)
        .execute(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        let slot = sqlx::query_as::<_, TimeSlot>(
            "SELECT * FROM time_slots WHERE station_id = ? AND date = ? AND start_time = ?",
        )
        .bind(&request.station_id)
        .bind(request.date)
        .bind(request.start_time)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        let duplicates: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM bookings
             WHERE time_slot_id = ? AND user_id = ? AND vehicle_id = ? AND status != ?",
        )
        .bind(&slot.id)
        .bind(&request.user_id)
        .bind(&request.vehicle_id)
        .bind(BookingStatus::Cancelled)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;
        if duplicates > 0 {
            return Err(AppError::DuplicateBooking);
        }

        // Conditional increment is the capacity gate. Zero rows affected
        // means the slot filled up; the transaction rolls back untouched.
        let claimed = sqlx::query(
            "UPDATE time_slots SET booked_count = booked_count + 1
             WHERE id = ? AND booked_count < capacity",
        )
        .bind(&slot.id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::Database)?;
        if claimed.rows_affected() == 0 {
            return Err(AppError::SlotFull);
        }

        let booking = Booking::new(request, slot.id.clone());
        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, user_id, station_id, vehicle_id, time_slot_id, booking_date, booking_time, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&booking.id)
        .bind(&booking.user_id)
        .bind(&booking.station_id)
        .bind(&booking.vehicle_id)
        .bind(&booking.time_slot_id)
        .bind(booking.booking_date)
        .bind(booking.booking_time)
        .bind(booking.status)
        .bind(booking.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn cancel(&self, user_id: &str, booking_id: &str) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let cancelled = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = ?
             WHERE id = ? AND user_id = ? AND status = ?
             RETURNING *",
        )
        .bind(BookingStatus::Cancelled)
        .bind(booking_id)
        .bind(user_id)
        .bind(BookingStatus::Upcoming)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        let Some(cancelled) = cancelled else {
            // The guarded update missed: either the booking is not visible to
            // this user, or its status is terminal. Let the state machine
            // produce the precise error.
            let current = sqlx::query_as::<_, Booking>(
                "SELECT * FROM bookings WHERE id = ? AND user_id = ?",
            )
            .bind(booking_id)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))?;

            current.status.transition(BookingStatus::Cancelled)?;
            return Err(AppError::Internal);
        };

        // A cancelled booking permanently frees its capacity unit.
        sqlx::query(
            "UPDATE time_slots SET booked_count = MAX(booked_count - 1, 0) WHERE id = ?",
        )
        .bind(&cancelled.time_slot_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(cancelled)
    }

    async fn complete(&self, booking_id: &str) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Completion keeps the capacity unit consumed: the slot was
        // fulfilled, not freed, so booked_count stays put.
        let completed = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = ?
             WHERE id = ? AND status = ?
             RETURNING *",
        )
        .bind(BookingStatus::Completed)
        .bind(booking_id)
        .bind(BookingStatus::Upcoming)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        let Some(completed) = completed else {
            let current = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
                .bind(booking_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::Database)?
                .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))?;

            current.status.transition(BookingStatus::Completed)?;
            return Err(AppError::Internal);
        };

        tx.commit().await.map_err(AppError::Database)?;
        Ok(completed)
    }

    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = ?
             ORDER BY booking_date DESC, booking_time DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn count_effective(&self, time_slot_id: &str) -> Result<i64, AppError> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM bookings WHERE time_slot_id = ? AND status != ?",
        )
        .bind(time_slot_id)
        .bind(BookingStatus::Cancelled)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_due_completion(
        &self,
        now: NaiveDateTime,
        limit: i64,
    ) -> Result<Vec<Booking>, AppError> {
        let today: NaiveDate = now.date();
        sqlx::query_as::<_, Booking>(
            "SELECT b.* FROM bookings b
             JOIN time_slots s ON s.id = b.time_slot_id
             WHERE b.status = ? AND (s.date < ? OR (s.date = ? AND s.end_time <= ?))
             ORDER BY s.date ASC, s.end_time ASC
             LIMIT ?",
        )
        .bind(BookingStatus::Upcoming)
        .bind(today)
        .bind(today)
        .bind(now.time())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
