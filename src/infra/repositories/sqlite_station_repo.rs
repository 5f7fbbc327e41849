use crate::domain::{models::station::Station, ports::StationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteStationRepo {
    pool: SqlitePool,
}

impl SqliteStationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StationRepository for SqliteStationRepo {
    async fn create(&self, station: &Station) -> Result<Station, AppError> {
        sqlx::query_as::<_, Station>(
            "INSERT INTO stations (id, name, address, city, state, opening_time, closing_time, is_active, created_by, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&station.id)
        .bind(&station.name)
        .bind(&station.address)
        .bind(&station.city)
        .bind(&station.state)
        .bind(station.opening_time)
        .bind(station.closing_time)
        .bind(station.is_active)
        .bind(&station.created_by)
        .bind(station.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Station>, AppError> {
        sqlx::query_as::<_, Station>("SELECT * FROM stations WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_active(&self) -> Result<Vec<Station>, AppError> {
        sqlx::query_as::<_, Station>(
            "SELECT * FROM stations WHERE is_active = 1 ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
