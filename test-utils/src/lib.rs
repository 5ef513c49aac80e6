//! Flightlog Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the flightlog
//! proxy. This crate offers a builder pattern for creating test contexts with a mock upstream
//! aviation API and in-memory sessions.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring the mock upstream's canned responses
//! - **TestContext**: Test environment holding the running mock upstream and a session
//! - **MockUpstream**: Axum server on an ephemeral port that records every request it receives
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, upstream::MockResponse};
//!
//! #[tokio::test]
//! async fn fetches_stats() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_response("GET", "/stats", MockResponse::json(r#"{"flights":3}"#))
//!         .build()
//!         .await?;
//!
//!     let base_url = test.upstream_url();
//!     // Point the client under test at `base_url`...
//!
//!     assert_eq!(test.requests().len(), 1);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod upstream;
