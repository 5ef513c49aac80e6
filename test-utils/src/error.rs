use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Binding or inspecting a local listener failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Writing to the in-memory session failed.
    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),
}
