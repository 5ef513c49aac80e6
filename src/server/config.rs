use std::{path::PathBuf, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_USER_URL: &str = "https://discord.com/api/users/@me";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM_API_URL: &str = "https://api.pfconnect.online/api/v1";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_PAGES_DIR: &str = "pages";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// Signed session cookies need a 64 byte key.
pub const MIN_SESSION_SECRET_BYTES: usize = 64;

pub struct Config {
    pub port: u16,

    pub session_secret: String,
    pub secure_cookies: bool,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,
    pub discord_user_url: String,

    pub upstream_api_url: String,
    pub upstream_api_key: String,
    pub upstream_timeout: Duration,

    pub static_dir: PathBuf,
    /// Login and dashboard pages; kept apart from `static_dir` so only the gated routes serve them.
    pub pages_dir: PathBuf,
    pub attachments_enabled: bool,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes `std::env::var`; tests pass a map.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value parsed
    /// - `Err(AppError::ConfigErr(_))` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let session_secret = required("SESSION_SECRET")?;
        if session_secret.len() < MIN_SESSION_SECRET_BYTES {
            return Err(ConfigError::SessionSecretTooShort {
                min: MIN_SESSION_SECRET_BYTES,
                actual: session_secret.len(),
            }
            .into());
        }

        let discord_redirect_url = required("DISCORD_REDIRECT_URL")?;
        validate_url("DISCORD_REDIRECT_URL", &discord_redirect_url)?;

        let upstream_api_url = lookup("UPSTREAM_API_URL")
            .unwrap_or_else(|| DEFAULT_UPSTREAM_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        validate_url("UPSTREAM_API_URL", &upstream_api_url)?;

        let upstream_timeout_secs = parse_or(
            "UPSTREAM_TIMEOUT_SECS",
            &lookup,
            DEFAULT_UPSTREAM_TIMEOUT_SECS,
        )?;

        Ok(Self {
            port: parse_or("PORT", &lookup, DEFAULT_PORT)?,
            session_secret,
            secure_cookies: parse_or("SECURE_COOKIES", &lookup, false)?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_user_url: DISCORD_USER_URL.to_string(),
            upstream_api_url,
            upstream_api_key: required("API_KEY")?,
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            pages_dir: lookup("PAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PAGES_DIR)),
            attachments_enabled: parse_or("ATTACHMENTS_ENABLED", &lookup, false)?,
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", &lookup, DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}

fn parse_or<T, F>(name: &str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: e.to_string(),
        }),
    }
}

fn validate_url(name: &str, value: &str) -> Result<(), ConfigError> {
    url::Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        name: name.to_string(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn base_vars() -> HashMap<&'static str, String> {
        HashMap::from([
            ("SESSION_SECRET", "s".repeat(64)),
            ("DISCORD_CLIENT_ID", "1234".to_string()),
            ("DISCORD_CLIENT_SECRET", "secret".to_string()),
            (
                "DISCORD_REDIRECT_URL",
                "http://localhost:3000/auth/discord/callback".to_string(),
            ),
            ("API_KEY", "pfc_test".to_string()),
        ])
    }

    fn load(vars: &HashMap<&'static str, String>) -> Result<Config, AppError> {
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    /// Tests defaults are applied for optional variables.
    ///
    /// Expected: Ok(Config) with port 3000, 5 second timeout, attachments off
    #[test]
    fn applies_defaults() {
        let config = load(&base_vars()).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.upstream_api_url, "https://api.pfconnect.online/api/v1");
        assert_eq!(config.upstream_timeout, Duration::from_secs(5));
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.pages_dir, PathBuf::from("pages"));
        assert!(!config.attachments_enabled);
        assert!(!config.secure_cookies);
    }

    /// Tests a missing required variable is reported by name.
    ///
    /// Expected: Err(ConfigError::MissingEnvVar("API_KEY"))
    #[test]
    fn reports_missing_variable_by_name() {
        let mut vars = base_vars();
        vars.remove("API_KEY");

        match load(&vars) {
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) => {
                assert_eq!(name, "API_KEY")
            }
            Err(e) => panic!("Expected MissingEnvVar, got: {:?}", e),
            Ok(_) => panic!("Expected MissingEnvVar, got Ok"),
        }
    }

    /// Tests short session secrets are rejected.
    ///
    /// Expected: Err(ConfigError::SessionSecretTooShort)
    #[test]
    fn rejects_short_session_secret() {
        let mut vars = base_vars();
        vars.insert("SESSION_SECRET", "too-short".to_string());

        assert!(matches!(
            load(&vars),
            Err(AppError::ConfigErr(ConfigError::SessionSecretTooShort { .. }))
        ));
    }

    /// Tests unparsable numeric values are rejected.
    ///
    /// Expected: Err(ConfigError::InvalidEnvVar) naming PORT
    #[test]
    fn rejects_invalid_port() {
        let mut vars = base_vars();
        vars.insert("PORT", "eighty".to_string());

        match load(&vars) {
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { name, value, .. })) => {
                assert_eq!(name, "PORT");
                assert_eq!(value, "eighty");
            }
            Err(e) => panic!("Expected InvalidEnvVar, got: {:?}", e),
            Ok(_) => panic!("Expected InvalidEnvVar, got Ok"),
        }
    }

    /// Tests overrides and trailing slash trimming on the upstream URL.
    ///
    /// Expected: Ok(Config) with overridden values
    #[test]
    fn applies_overrides() {
        let mut vars = base_vars();
        vars.insert("UPSTREAM_API_URL", "http://127.0.0.1:9000/api/v1/".to_string());
        vars.insert("UPSTREAM_TIMEOUT_SECS", "2".to_string());
        vars.insert("ATTACHMENTS_ENABLED", "true".to_string());
        vars.insert("PORT", "8080".to_string());

        let config = load(&vars).unwrap();

        assert_eq!(config.upstream_api_url, "http://127.0.0.1:9000/api/v1");
        assert_eq!(config.upstream_timeout, Duration::from_secs(2));
        assert!(config.attachments_enabled);
        assert_eq!(config.port, 8080);
    }
}
