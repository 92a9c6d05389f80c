use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::{HashError, PasswordHasher as HasherTrait};
use crate::config::{parse_or, ConfigError};

/// Cost parameters, tunable through `ARGON2_*` variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Config {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Argon2Config {
    fn default() -> Self {
        // Small VPS friendly: 4MB memory, 3 iterations, 1 lane
        Self {
            memory_kib: 4 * 1024,
            iterations: 3,
            parallelism: 1,
        }
    }
}

impl Argon2Config {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            memory_kib: parse_or(lookup, "ARGON2_MEMORY_KIB", defaults.memory_kib)?,
            iterations: parse_or(lookup, "ARGON2_ITERATIONS", defaults.iterations)?,
            parallelism: parse_or(lookup, "ARGON2_PARALLELISM", defaults.parallelism)?,
        };

        config.params()?;
        Ok(config)
    }

    fn params(&self) -> Result<Params, ConfigError> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| ConfigError::Constraint(format!("Invalid Argon2 parameters: {e}")))
    }
}

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Argon2Hasher {
    pub fn new(config: Argon2Config) -> Result<Self, ConfigError> {
        Ok(Self {
            params: config.params()?,
            #[cfg(test)]
            salt_override: None,
        })
    }

    #[cfg(test)]
    pub fn with_fixed_salt(salt: &str) -> Self {
        Self {
            params: Params::new(4 * 1024, 3, 1, None).expect("valid params"),
            salt_override: Some(SaltString::from_b64(salt).expect("valid salt")),
        }
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        // Parameters are read back from the PHC string
        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
