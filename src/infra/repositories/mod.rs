pub mod sqlite_booking_repo;
pub mod sqlite_slot_repo;
pub mod sqlite_station_repo;
pub mod sqlite_vehicle_repo;
