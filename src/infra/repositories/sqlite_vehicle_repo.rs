use crate::domain::{models::vehicle::Vehicle, ports::VehicleRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteVehicleRepo {
    pool: SqlitePool,
}

impl SqliteVehicleRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for SqliteVehicleRepo {
    async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        sqlx::query_as::<_, Vehicle>(
            "INSERT INTO vehicles (id, user_id, make, model, name, license_plate, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&vehicle.id)
        .bind(&vehicle.user_id)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(&vehicle.name)
        .bind(&vehicle.license_plate)
        .bind(vehicle.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>, AppError> {
        sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Vehicle>, AppError> {
        sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE user_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let owned: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM vehicles WHERE id = ? AND user_id = ?",
        )
        .bind(id)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;
        if owned == 0 {
            return Err(AppError::NotFound("Vehicle not found".into()));
        }

        // Booking rows reference their vehicle forever, terminal or not, so
        // a vehicle with history can never be deleted. Checked here rather
        // than surfaced as a foreign key failure.
        let referenced: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE vehicle_id = ?")
                .bind(id)
                .fetch_one(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        if referenced > 0 {
            return Err(AppError::VehicleInUse);
        }

        sqlx::query("DELETE FROM vehicles WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }
}
