mod common;

use axum::http::StatusCode;
use common::{future_date, parse_body, TestApp};

#[tokio::test]
async fn test_full_grid_for_unbooked_station_day() {
    let app = TestApp::new().await;
    let token = TestApp::token_for("user-a");

    let station = app.create_station(&token, "CNG Central", "08:00", "10:00").await;
    let station_id = station["id"].as_str().unwrap();

    let response = app
        .get(
            &format!("/api/v1/stations/{}/availability?date={}", station_id, future_date()),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    let slots = body["slots"].as_array().unwrap();

    assert_eq!(slots.len(), 4);
    assert_eq!(body["slot_duration_min"], 30);

    let starts: Vec<&str> = slots.iter().map(|s| s["start_time"].as_str().unwrap()).collect();
    assert_eq!(starts, vec!["08:00", "08:30", "09:00", "09:30"]);

    for slot in slots {
        assert_eq!(slot["capacity"], 1);
        assert_eq!(slot["booked_count"], 0);
        assert_eq!(slot["available"], true);
    }
}

#[tokio::test]
async fn test_partial_trailing_window_is_not_offered() {
    let app = TestApp::new().await;
    let token = TestApp::token_for("user-a");

    let station = app.create_station(&token, "Short Hours", "08:00", "09:10").await;
    let station_id = station["id"].as_str().unwrap();

    let response = app
        .get(
            &format!("/api/v1/stations/{}/availability?date={}", station_id, future_date()),
            None,
        )
        .await;
    let body = parse_body(response).await;
    let slots = body["slots"].as_array().unwrap();

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0]["start_time"], "08:00");
    assert_eq!(slots[0]["end_time"], "08:30");
    assert_eq!(slots[1]["start_time"], "08:30");
    assert_eq!(slots[1]["end_time"], "09:00");
}

#[tokio::test]
async fn test_past_date_renders_grid_but_nothing_is_bookable() {
    let app = TestApp::new().await;
    let token = TestApp::token_for("user-a");

    let station = app.create_station(&token, "CNG Central", "08:00", "10:00").await;
    let station_id = station["id"].as_str().unwrap();

    let past = (chrono::Local::now().date_naive() - chrono::Duration::days(7))
        .format("%Y-%m-%d")
        .to_string();

    let response = app
        .get(
            &format!("/api/v1/stations/{}/availability?date={}", station_id, past),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    let slots = body["slots"].as_array().unwrap();

    assert_eq!(slots.len(), 4);
    for slot in slots {
        assert_eq!(slot["available"], false);
    }
}

#[tokio::test]
async fn test_booked_slot_shows_in_availability() {
    let app = TestApp::new().await;
    let token = TestApp::token_for("user-a");

    let station = app.create_station(&token, "CNG Central", "08:00", "10:00").await;
    let station_id = station["id"].as_str().unwrap();
    let vehicle = app.create_vehicle(&token).await;
    let vehicle_id = vehicle["id"].as_str().unwrap();

    let date = future_date();
    let response = app.book(&token, station_id, vehicle_id, &date, "08:30").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .get(
            &format!("/api/v1/stations/{}/availability?date={}", station_id, date),
            None,
        )
        .await;
    let body = parse_body(response).await;
    let slots = body["slots"].as_array().unwrap();

    assert_eq!(slots[1]["start_time"], "08:30");
    assert_eq!(slots[1]["booked_count"], 1);
    assert_eq!(slots[1]["available"], false);

    // Other slots stay open.
    assert_eq!(slots[0]["available"], true);
    assert_eq!(slots[2]["available"], true);
}

#[tokio::test]
async fn test_availability_rejects_bad_input() {
    let app = TestApp::new().await;
    let token = TestApp::token_for("user-a");

    let station = app.create_station(&token, "CNG Central", "08:00", "10:00").await;
    let station_id = station["id"].as_str().unwrap();

    let response = app
        .get(
            &format!("/api/v1/stations/{}/availability?date=15-09-2026", station_id),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .get(
            &format!("/api/v1/stations/unknown-station/availability?date={}", future_date()),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
