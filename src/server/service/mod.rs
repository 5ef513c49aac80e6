//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the external collaborators. Services are responsible for:
//!
//! - **Upstream access**: Every call to the aviation API goes through `UpstreamClient`
//! - **Identity**: Building the Discord login URL and exchanging codes for profiles
//! - **Orchestration**: Submitting flight logs and routing their attachments
//!
//! Services work with domain models rather than DTOs.

pub mod attachment;
pub mod flight_log;
pub mod oauth;
pub mod upstream;
