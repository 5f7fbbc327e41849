pub mod booking;
pub mod station;
pub mod time_slot;
pub mod vehicle;
