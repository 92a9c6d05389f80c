use std::{env, io::BufRead, str::FromStr};

use tracing::info;

use crate::auth::adapter::outgoing::{jwt::JwtConfig, security::Argon2Config};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("{0}")]
    Constraint(String),
}

/// Loads `.env.{RUST_ENV}` (default `development`), falling back to `.env`.
pub fn load_env_file() {
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{rust_env}");

    if dotenvy::from_filename(&env_file).is_ok() {
        info!(file = %env_file, "Loaded environment file");
    } else if dotenvy::dotenv().is_ok() {
        info!("Loaded .env");
    }
}

pub(crate) fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

pub(crate) fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

/// Staff password for `create-admin`: `ADMIN_PASSWORD` when set, otherwise
/// the first line of `input`. Never taken from the command line.
pub fn admin_password<F, R>(lookup: &F, mut input: R) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    R: BufRead,
{
    if let Ok(password) = required(lookup, "ADMIN_PASSWORD") {
        return Ok(password);
    }

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| ConfigError::Constraint(format!("Failed to read password from stdin: {e}")))?;

    let password = line.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        return Err(ConfigError::Missing("ADMIN_PASSWORD"));
    }

    Ok(password.to_string())
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub redis_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub jwt: JwtConfig,
    pub argon2: Argon2Config,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            None => return Err(ConfigError::Missing("PORT")),
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
        };

        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 20u32)?;
        if db_max_connections == 0 {
            return Err(ConfigError::Constraint(
                "DB_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            database_url: required(&lookup, "DATABASE_URL")?,
            redis_url: required(&lookup, "REDIS_URL")?,
            host: required(&lookup, "HOST")?,
            port,
            db_max_connections,
            jwt: JwtConfig::from_lookup(&lookup)?,
            argon2: Argon2Config::from_lookup(&lookup)?,
        })
    }

    /// Only what `migrate` needs.
    pub fn database_url_from_env() -> Result<String, ConfigError> {
        required(&|key: &str| env::var(key).ok(), "DATABASE_URL")
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
