use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Vehicle {
    pub id: String,
    pub user_id: String,
    pub make: String,
    pub model: String,
    pub name: Option<String>,
    pub license_plate: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn new(
        user_id: String,
        make: String,
        model: String,
        name: Option<String>,
        license_plate: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            make,
            model,
            name,
            license_plate,
            created_at: Utc::now(),
        }
    }
}
