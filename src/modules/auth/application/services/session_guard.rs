use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, warn};

use crate::auth::application::{
    domain::entities::UserId,
    ports::outgoing::{TokenError, TokenProvider, TokenRepository, TokenType},
    services::token_hasher::hash_token,
};

/// An access token that verified, has the right type and is not revoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub is_staff: bool,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid or expired token: {0}")]
    InvalidToken(TokenError),

    #[error("Invalid token type")]
    WrongTokenType,

    #[error("Token has been revoked")]
    Revoked,

    #[error("Revocation store unavailable: {0}")]
    StoreUnavailable(String),
}

/// The `require_login` gate: turns a bearer token into a [`Session`].
#[derive(Clone)]
pub struct SessionGuard {
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    blacklist: Arc<dyn TokenRepository + Send + Sync>,
}

impl SessionGuard {
    pub fn new(
        tokens: Arc<dyn TokenProvider + Send + Sync>,
        blacklist: Arc<dyn TokenRepository + Send + Sync>,
    ) -> Self {
        Self { tokens, blacklist }
    }

    pub async fn authenticate(&self, token: &str) -> Result<Session, SessionError> {
        let claims = self
            .tokens
            .verify_token(token)
            .map_err(SessionError::InvalidToken)?;

        if claims.token_type != TokenType::Access {
            debug!(user_id = %claims.sub, "Rejected non-access token on protected route");
            return Err(SessionError::WrongTokenType);
        }

        let revoked = self
            .blacklist
            .is_token_blacklisted(&hash_token(token))
            .await
            .map_err(|e| SessionError::StoreUnavailable(e.to_string()))?;

        if revoked {
            warn!(user_id = %claims.sub, "Revoked access token presented");
            return Err(SessionError::Revoked);
        }

        Ok(Session {
            user_id: UserId::from(claims.sub),
            is_staff: claims.is_staff,
            expires_at: expiry_to_datetime(claims.exp),
        })
    }
}

pub(crate) fn expiry_to_datetime(exp: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(exp, 0).single().unwrap_or_else(Utc::now)
}
