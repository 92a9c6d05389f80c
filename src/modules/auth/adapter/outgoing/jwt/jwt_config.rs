use std::env;

use crate::config::{parse_or, required, ConfigError};

const MAX_ACCESS_EXPIRY: i64 = 86400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,  // seconds
    pub refresh_token_expiry: i64, // seconds
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = required(lookup, "JWT_SECRET")?;

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::Constraint(
                "JWT_SECRET must be at least 32 characters long for HS256".to_string(),
            ));
        }

        let access_token_expiry = parse_or(lookup, "JWT_ACCESS_EXPIRY", 1800i64)?;
        let refresh_token_expiry = parse_or(lookup, "JWT_REFRESH_EXPIRY", 604800i64)?;

        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY {
            return Err(ConfigError::Constraint(
                "JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds".to_string(),
            ));
        }

        if refresh_token_expiry <= access_token_expiry {
            return Err(ConfigError::Constraint(
                "JWT_REFRESH_EXPIRY must be greater than JWT_ACCESS_EXPIRY".to_string(),
            ));
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "learning_log".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}
