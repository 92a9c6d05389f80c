use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use crate::auth::application::{
    ports::outgoing::{TokenError, TokenProvider, TokenRepository, TokenType},
    services::token_hasher::hash_token,
};

// ========================= Refresh Token Request =========================

#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshTokenRequestError {
    #[error("Refresh token cannot be empty")]
    EmptyToken,
}

impl RefreshTokenRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenRequestError> {
        let refresh_token = refresh_token.trim();
        if refresh_token.is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }

        Ok(Self {
            refresh_token: refresh_token.to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

// ====================== Refresh Token Error =============================

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Refresh token has expired")]
    TokenExpired,

    #[error("Invalid refresh token")]
    TokenInvalid,

    #[error("Invalid token type")]
    InvalidTokenType,

    #[error("Refresh token has been revoked")]
    TokenRevoked,

    #[error("Revocation store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::InvalidTokenType(_) => RefreshTokenError::InvalidTokenType,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
            TokenError::TokenNotYetValid
            | TokenError::InvalidSignature
            | TokenError::MalformedToken => RefreshTokenError::TokenInvalid,
        }
    }
}

// ============================ Refresh Token Response =========================

#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

// ============================ Refresh Token Use Case =============================

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

#[derive(Clone)]
pub struct RefreshTokenUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> RefreshTokenUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    pub fn new(token_repository: R, token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> IRefreshTokenUseCase for RefreshTokenUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let token = request.refresh_token();
        let claims = self.token_provider.verify_token(token)?;

        if claims.token_type != TokenType::Refresh {
            return Err(RefreshTokenError::InvalidTokenType);
        }

        let revoked = self
            .token_repository
            .is_token_blacklisted(&hash_token(token))
            .await
            .map_err(|e| RefreshTokenError::StoreUnavailable(e.to_string()))?;

        if revoked {
            warn!(user_id = %claims.sub, "Revoked refresh token presented");
            return Err(RefreshTokenError::TokenRevoked);
        }

        let access_token = self
            .token_provider
            .generate_access_token(claims.sub, claims.is_staff)?;

        Ok(RefreshTokenResponse { access_token })
    }
}
