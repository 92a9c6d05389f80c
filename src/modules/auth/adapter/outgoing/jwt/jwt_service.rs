use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider, TokenType};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        is_staff: bool,
        token_type: TokenType,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type,
            is_staff,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid, is_staff: bool) -> Result<String, TokenError> {
        self.generate_token(
            user_id,
            is_staff,
            TokenType::Access,
            self.config.access_token_expiry,
        )
    }

    fn generate_refresh_token(&self, user_id: Uuid, is_staff: bool) -> Result<String, TokenError> {
        self.generate_token(
            user_id,
            is_staff,
            TokenType::Refresh,
            self.config.refresh_token_expiry,
        )
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[&self.config.issuer]);

        let decoded = decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;

            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token verification failed: token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::ImmatureSignature => {
                    tracing::warn!("Token verification failed: token not yet valid");
                    TokenError::TokenNotYetValid
                }
                ErrorKind::InvalidSignature => {
                    tracing::error!("Security alert: invalid token signature detected");
                    TokenError::InvalidSignature
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Token verification failed: foreign issuer");
                    TokenError::InvalidSignature
                }
                _ => {
                    tracing::warn!(error = %e, "Token verification failed: malformed token");
                    TokenError::MalformedToken
                }
            }
        })?;

        Ok(decoded.claims)
    }

    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.verify_token(refresh_token)?;

        if claims.token_type != TokenType::Refresh {
            tracing::warn!(
                got = claims.token_type.as_str(),
                "Token type mismatch: expected refresh"
            );
            return Err(TokenError::InvalidTokenType(
                TokenType::Refresh.as_str().to_string(),
            ));
        }

        self.generate_access_token(claims.sub, claims.is_staff)
    }
}
