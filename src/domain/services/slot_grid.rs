use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

/// A candidate slot on a station's daily grid. Carries no occupancy
/// information; see `availability::annotate` for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CandidateSlot {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Derives the ordered slot grid for one station day: fixed-duration windows
/// covering `[opening, closing)` in ascending order. A trailing window that
/// would overrun `closing` is dropped, never shortened. Pure function; past
/// dates still produce their grid (historical display), the time-passed rule
/// lives in the availability projection.
pub fn generate_slots(
    date: NaiveDate,
    opening: NaiveTime,
    closing: NaiveTime,
    slot_duration_min: u32,
) -> Vec<CandidateSlot> {
    if slot_duration_min == 0 {
        return Vec::new();
    }

    // The grid is minute-resolution; seconds on the operating hours are ignored.
    let open_min = opening.hour() * 60 + opening.minute();
    let close_min = closing.hour() * 60 + closing.minute();

    let mut slots = Vec::new();
    let mut cursor = open_min;

    while cursor + slot_duration_min <= close_min {
        let end = cursor + slot_duration_min;

        if let (Some(start_time), Some(end_time)) = (
            NaiveTime::from_hms_opt(cursor / 60, cursor % 60, 0),
            NaiveTime::from_hms_opt(end / 60, end % 60, 0),
        ) {
            slots.push(CandidateSlot {
                date,
                start_time,
                end_time,
            });
        }

        cursor += slot_duration_min;
    }

    slots
}
