use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::refresh_token::{RefreshTokenError, RefreshTokenRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponseBody {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
}

fn map_refresh_error(err: RefreshTokenError) -> HttpResponse {
    match err {
        RefreshTokenError::TokenExpired => {
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Refresh token has expired")
        }
        RefreshTokenError::TokenInvalid => {
            warn!("Refresh rejected: invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
        RefreshTokenError::InvalidTokenType => {
            ApiResponse::unauthorized("INVALID_TOKEN_TYPE", "Invalid token type")
        }
        RefreshTokenError::TokenRevoked => {
            ApiResponse::unauthorized("TOKEN_REVOKED", "Token has been revoked")
        }
        RefreshTokenError::StoreUnavailable(e) => {
            error!(error = %e, "Token blacklist unavailable during refresh");
            ApiResponse::internal_error()
        }
        RefreshTokenError::TokenGenerationFailed(e) => {
            error!(error = %e, "Token generation failed during refresh");
            ApiResponse::internal_error()
        }
    }
}

/// Refresh access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New access token", body = inline(SuccessResponse<RefreshTokenResponseBody>)),
        (status = 400, description = "Empty token", body = ErrorResponse),
        (status = 401, description = "Invalid, expired or revoked token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match RefreshTokenRequest::new(req.into_inner().refresh_token) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.refresh_token_use_case.execute(request).await {
        Ok(response) => {
            info!("Access token refreshed");
            ApiResponse::success(RefreshTokenResponseBody {
                access_token: response.access_token,
            })
        }
        Err(e) => map_refresh_error(e),
    }
}
