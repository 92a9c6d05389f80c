use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::logout_user::LogoutRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LogoutRequestDto {
    /// Refresh token to revoke along with the access token
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out successfully")]
    pub message: String,
}

/// Logout
///
/// Revokes the presented access token and, when supplied, the refresh token.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body(content = LogoutRequestDto, description = "Optional body"),
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<LogoutResponseBody>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    req: Option<web::Json<LogoutRequestDto>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let refresh_token = req.and_then(|body| body.into_inner().refresh_token);
    let request = LogoutRequest::new(user.token, refresh_token);

    match data.logout_user_use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %user.user_id, revoked = response.revoked, "User logged out");
        }
        // The client drops its tokens either way
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Token revocation failed during logout");
        }
    }

    ApiResponse::success(LogoutResponseBody {
        message: "Logged out successfully".to_string(),
    })
}
