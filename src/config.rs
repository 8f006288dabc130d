use std::env;
use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} must be a number, got '{value}'")]
    NotANumber { name: &'static str, value: String },
    #[error("{name} is out of range, got '{value}'")]
    OutOfRange { name: &'static str, value: String },
}

/// Settings shared by token issuance and verification.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// HMAC secret used to sign and verify tokens.
    pub jwt_secret: String,
    /// Lifetime of an issued token.
    pub token_ttl_minutes: i64,
}

impl AuthSettings {
    pub fn new(jwt_secret: impl Into<String>, token_ttl_minutes: i64) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl_minutes,
        }
    }
}

/// Credentials of the administrator account seeded at startup.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub password: String,
}

pub struct Config {
    pub server_port: u16,
    pub server_host: String,
    pub auth: AuthSettings,
    pub admin: AdminSeed,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            server_port: parse_number(&lookup, "SERVER_PORT", 8080)?,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            auth: AuthSettings::new(jwt_secret, parse_token_ttl(&lookup)?),
            admin: AdminSeed {
                username: lookup("ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string()),
                password: lookup("ADMIN_PASSWORD").unwrap_or_else(|| "admin".to_string()),
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

fn parse_number<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::NotANumber { name, value }),
        None => Ok(default),
    }
}

/// Token lifetime in minutes. Must be positive and representable as a duration.
fn parse_token_ttl<F>(lookup: &F) -> Result<i64, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    let minutes = parse_number(lookup, "TOKEN_TTL_MINUTES", 30)?;
    if minutes <= 0 || chrono::Duration::try_minutes(minutes).is_none() {
        return Err(ConfigError::OutOfRange {
            name: "TOKEN_TTL_MINUTES",
            value: minutes.to_string(),
        });
    }
    Ok(minutes)
}
