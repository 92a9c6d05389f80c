use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

// ========================= Login Request =========================

#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(username: String, password: String) -> Result<Self, LoginRequestError> {
        let username = username.trim();

        if username.is_empty() {
            return Err(LoginRequestError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown username and wrong password are deliberately the same error.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Response =================================

#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: uuid::Uuid,
    pub username: String,
    pub is_staff: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

// ============================ Login User Use Case =============================

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .query
            .find_by_username(request.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.is_staff)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id, user.is_staff)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            access_token,
            refresh_token,
            user: UserInfo {
                id: user.id,
                username: user.username,
                is_staff: user.is_staff,
            },
        })
    }
}
