pub mod apps;
pub mod datetime;
