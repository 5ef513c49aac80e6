//! Test fixtures providing reusable test data.
//!
//! Fixtures are plain in-memory values: canned upstream bodies, sample request payloads and a
//! sample identity-provider profile. Nothing here talks to the network.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let body = fixture::flight_log::json();
//! let profile = fixture::profile::discord_user();
//! ```

pub mod flight_log;
pub mod profile;
pub mod upstream;
