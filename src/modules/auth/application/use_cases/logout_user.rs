use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::auth::application::{
    ports::outgoing::{TokenProvider, TokenRepository, TokenRepositoryError},
    services::{session_guard::expiry_to_datetime, token_hasher::hash_token},
};

// ========================= Logout Request =========================

/// The access token comes from the `Authorization` header, the refresh token
/// optionally from the body.
#[derive(Debug, Clone)]
pub struct LogoutRequest {
    access_token: String,
    refresh_token: Option<String>,
}

impl LogoutRequest {
    pub fn new(access_token: String, refresh_token: Option<String>) -> Self {
        Self {
            access_token,
            refresh_token: refresh_token
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}

// ====================== Logout Response / Error =============================

#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    pub message: String,
    pub revoked: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Token revocation failed: {0}")]
    TokenRevocationFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<TokenRepositoryError> for LogoutError {
    fn from(error: TokenRepositoryError) -> Self {
        match error {
            TokenRepositoryError::DatabaseError(msg) => LogoutError::DatabaseError(msg),
            other => LogoutError::TokenRevocationFailed(other.to_string()),
        }
    }
}

// ============================ Logout Use Case =============================

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, request: LogoutRequest) -> Result<LogoutResponse, LogoutError>;
}

#[derive(Clone)]
pub struct LogoutUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> LogoutUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    pub fn new(token_repository: R, token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }

    /// Returns whether the token was blacklisted. Tokens that no longer
    /// verify are already unusable and are skipped.
    async fn revoke(&self, token: &str) -> Result<bool, LogoutError> {
        let claims = match self.token_provider.verify_token(token) {
            Ok(claims) => claims,
            Err(e) => {
                warn!(error = %e, "Skipping revocation of unverifiable token");
                return Ok(false);
            }
        };

        self.token_repository
            .blacklist_token(hash_token(token), claims.sub, expiry_to_datetime(claims.exp))
            .await?;

        info!(
            user_id = %claims.sub,
            token_type = claims.token_type.as_str(),
            "Token blacklisted"
        );
        Ok(true)
    }
}

#[async_trait]
impl<R> ILogoutUseCase for LogoutUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    async fn execute(&self, request: LogoutRequest) -> Result<LogoutResponse, LogoutError> {
        let mut revoked = 0;

        if self.revoke(request.access_token()).await? {
            revoked += 1;
        }

        if let Some(refresh_token) = request.refresh_token() {
            if self.revoke(refresh_token).await? {
                revoked += 1;
            }
        }

        Ok(LogoutResponse {
            message: "Logged out successfully".to_string(),
            revoked,
        })
    }
}
