use crate::domain::models::time_slot::TimeSlot;
use crate::domain::services::slot_grid::CandidateSlot;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnnotatedSlot {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity: i64,
    pub booked_count: i64,
    pub available: bool,
}

/// Projects current occupancy onto a candidate grid. `rows` must already be
/// scoped to the grid's station and date, so the natural-key match reduces to
/// the start time. Candidates without a persisted row are unbooked slots at
/// the default capacity. Read-only; nothing here touches the store.
pub fn annotate(
    candidates: &[CandidateSlot],
    rows: &[TimeSlot],
    now: NaiveDateTime,
    default_capacity: i64,
) -> Vec<AnnotatedSlot> {
    let by_start: HashMap<NaiveTime, &TimeSlot> =
        rows.iter().map(|row| (row.start_time, row)).collect();

    candidates
        .iter()
        .map(|candidate| {
            let (capacity, booked_count) = match by_start.get(&candidate.start_time) {
                Some(row) => (row.capacity, row.booked_count),
                None => (default_capacity, 0),
            };

            let in_past = candidate.date.and_time(candidate.start_time) < now;

            AnnotatedSlot {
                date: candidate.date,
                start_time: candidate.start_time,
                end_time: candidate.end_time,
                capacity,
                booked_count,
                available: booked_count < capacity && !in_past,
            }
        })
        .collect()
}
