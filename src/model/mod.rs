//! Data transfer objects exchanged with the dashboard frontend.

pub mod api;
pub mod flight_log;
pub mod user;
