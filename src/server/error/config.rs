use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be parsed.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value that failed to parse
        value: String,
        /// Parser error message
        reason: String,
    },

    /// Environment variable holds a malformed URL.
    #[error("Invalid URL in environment variable {name}: {source}")]
    InvalidUrl {
        /// Name of the offending variable
        name: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// `SESSION_SECRET` is too short to derive the cookie signing key.
    #[error("SESSION_SECRET must be at least {min} bytes, got {actual}")]
    SessionSecretTooShort { min: usize, actual: usize },
}
