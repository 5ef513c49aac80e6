//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, convert request bodies into domain models,
//! call services, and shape responses. Every handler returns `Result<_, AppError>`, so all
//! failures resolve through `AppError`'s `IntoResponse` implementation.

pub mod auth;
pub mod flight;
pub mod page;
pub mod user;

#[cfg(test)]
mod test;
