use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewStationParams {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub created_by: String,
}

impl Station {
    pub fn new(params: NewStationParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            address: params.address,
            city: params.city,
            state: params.state,
            opening_time: params.opening_time,
            closing_time: params.closing_time,
            is_active: true,
            created_by: params.created_by,
            created_at: Utc::now(),
        }
    }
}
