pub mod changes;
pub mod factory;
pub mod repositories;
