use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest, LoginUserResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "ada")]
    pub username: String,

    #[schema(example = "analytical engine")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token (short-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// JWT refresh token (long-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,

    pub user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "ada")]
    pub username: String,

    #[schema(example = false)]
    pub is_staff: bool,
}

impl From<LoginUserResponse> for LoginResponse {
    fn from(response: LoginUserResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            user: LoginUserInfo {
                id: response.user.id.to_string(),
                username: response.user.username,
                is_staff: response.user.is_staff,
            },
        }
    }
}

/// User login
///
/// Exchanges username and password for an access/refresh token pair.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Login attempt");

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_user_use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in successfully");
            ApiResponse::success(LoginResponse::from(response))
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}
