//! Server-side proxy and session handling.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Upstream calls, the Discord handshake, and attachment routing
//! - **Model Layer** (`model/`) - Domain models for sessions, submissions and upstream calls
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (upstream client, OAuth client, etc.)
//! - **Startup** (`startup`) - Initialization of HTTP clients and cookie signing
//! - **Router** (`router`) - Axum route configuration and middleware layers
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Session layer** loads the session named by the signed cookie
//! 3. **Controller** checks the session through `AuthGuard`, extracts fields, calls a service
//! 4. **Service** calls the upstream API or Discord
//! 5. **Controller** relays the upstream body or answers with its own envelope

pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

#[cfg(test)]
pub mod test_support;
