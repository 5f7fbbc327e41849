use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use cng_booking_backend::{
    api::extractors::auth::Claims,
    api::router::create_router,
    background::start_completion_sweeper,
    config::Config,
    infra::changes::ChangeFeed,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo, sqlite_slot_repo::SqliteSlotRepo,
        sqlite_station_repo::SqliteStationRepo, sqlite_vehicle_repo::SqliteVehicleRepo,
    },
    state::AppState,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-secret-shared-with-idp";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret: TEST_JWT_SECRET.to_string(),
            slot_duration_min: 30,
            default_slot_capacity: 1,
        };

        let state = Arc::new(AppState {
            config,
            station_repo: Arc::new(SqliteStationRepo::new(pool.clone())),
            vehicle_repo: Arc::new(SqliteVehicleRepo::new(pool.clone())),
            slot_repo: Arc::new(SqliteSlotRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            changes: ChangeFeed::new(),
        });

        let sweeper_state = state.clone();
        tokio::spawn(async move {
            start_completion_sweeper(sweeper_state).await;
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Mints an access token the way the external identity provider would.
    pub fn token_for(user_id: &str) -> String {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        )
        .unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> axum::response::Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> axum::response::Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> axum::response::Response {
        let mut builder = Request::builder().method("DELETE").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn create_station(
        &self,
        token: &str,
        name: &str,
        opening_time: &str,
        closing_time: &str,
    ) -> Value {
        let response = self
            .post(
                "/api/v1/stations",
                Some(token),
                json!({
                    "name": name,
                    "address": "42 Pipeline Rd",
                    "city": "Pune",
                    "state": "MH",
                    "opening_time": opening_time,
                    "closing_time": closing_time,
                }),
            )
            .await;
        assert!(
            response.status().is_success(),
            "create_station failed: {}",
            response.status()
        );
        parse_body(response).await
    }

    pub async fn create_vehicle(&self, token: &str) -> Value {
        let response = self
            .post(
                "/api/v1/vehicles",
                Some(token),
                json!({
                    "make": "Maruti",
                    "model": "WagonR CNG",
                    "name": "Daily driver",
                    "license_plate": "MH12AB3456",
                }),
            )
            .await;
        assert!(
            response.status().is_success(),
            "create_vehicle failed: {}",
            response.status()
        );
        parse_body(response).await
    }

    pub async fn book(
        &self,
        token: &str,
        station_id: &str,
        vehicle_id: &str,
        date: &str,
        time: &str,
    ) -> axum::response::Response {
        self.post(
            "/api/v1/bookings",
            Some(token),
            json!({
                "station_id": station_id,
                "vehicle_id": vehicle_id,
                "date": date,
                "time": time,
            }),
        )
        .await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// A date comfortably in the future, formatted for the API.
#[allow(dead_code)]
pub fn future_date() -> String {
    (chrono::Local::now().date_naive() + chrono::Duration::days(7))
        .format("%Y-%m-%d")
        .to_string()
}
