//! Server-side domain models.
//!
//! This module contains domain models used throughout the service layer. Domain models are
//! built from DTOs at the controller boundary and carry only what the service layer needs.

pub mod flight_log;
pub mod upstream;
pub mod user;
