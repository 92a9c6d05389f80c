use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::{
    ports::outgoing::{
        TokenClaims, TokenError, TokenProvider, TokenRepository, TokenRepositoryError, TokenType,
    },
    services::session_guard::SessionGuard,
};

/// Token provider that accepts any token as the configured claims and
/// issues readable tokens (`access-{user_id}`, `refresh-{user_id}`).
#[derive(Clone)]
pub struct StubTokenProvider {
    claims: Option<TokenClaims>,
}

impl StubTokenProvider {
    fn verifying(user_id: Uuid, token_type: TokenType, is_staff: bool) -> Self {
        let now = Utc::now().timestamp();
        Self {
            claims: Some(TokenClaims {
                sub: user_id,
                exp: now + 3600,
                iat: now,
                nbf: now,
                iss: "learning_log".to_string(),
                token_type,
                is_staff,
            }),
        }
    }

    pub fn access(user_id: Uuid) -> Self {
        Self::verifying(user_id, TokenType::Access, false)
    }

    pub fn staff(user_id: Uuid) -> Self {
        Self::verifying(user_id, TokenType::Access, true)
    }

    pub fn refresh(user_id: Uuid) -> Self {
        Self::verifying(user_id, TokenType::Refresh, false)
    }

    /// Rejects every token.
    pub fn invalid() -> Self {
        Self { claims: None }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid, _is_staff: bool) -> Result<String, TokenError> {
        Ok(format!("access-{user_id}"))
    }

    fn generate_refresh_token(
        &self,
        user_id: Uuid,
        _is_staff: bool,
    ) -> Result<String, TokenError> {
        Ok(format!("refresh-{user_id}"))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        self.claims.clone().ok_or(TokenError::InvalidSignature)
    }

    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.verify_token(refresh_token)?;
        if claims.token_type != TokenType::Refresh {
            return Err(TokenError::InvalidTokenType("refresh".to_string()));
        }
        self.generate_access_token(claims.sub, claims.is_staff)
    }
}

/// Blacklist kept in memory; clones share the same set.
#[derive(Clone, Default)]
pub struct InMemoryTokenRepository {
    hashes: Arc<Mutex<HashSet<String>>>,
}

impl InMemoryTokenRepository {
    pub fn revoke(&self, token_hash: &str) {
        self.hashes.lock().unwrap().insert(token_hash.to_string());
    }

    pub fn contains(&self, token_hash: &str) -> bool {
        self.hashes.lock().unwrap().contains(token_hash)
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn blacklist_token(
        &self,
        token_hash: String,
        _user_id: Uuid,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        self.hashes.lock().unwrap().insert(token_hash);
        Ok(())
    }

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        Ok(self.contains(token_hash))
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// A `require_login` gate over `provider` with nothing revoked.
pub fn session_guard(provider: StubTokenProvider) -> SessionGuard {
    SessionGuard::new(
        Arc::new(provider),
        Arc::new(InMemoryTokenRepository::default()),
    )
}
