use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::{
    orchestrator::user_registration::UserRegistrationError,
    use_cases::create_user::{CreateUserCommand, CreateUserCommandError, CreateUserError},
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::login_user::LoginResponse;

#[derive(Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "ada")]
    pub username: String,

    #[schema(example = "analytical engine")]
    pub password1: String,

    /// Confirmation, must equal `password1`
    #[schema(example = "analytical engine")]
    pub password2: String,
}

/// What a failed registration echoes back. Passwords are never returned.
#[derive(Serialize, ToSchema)]
pub struct RegisterForm {
    #[schema(example = "ada")]
    pub username: String,
}

fn map_command_error(err: &CreateUserCommandError, form: RegisterForm) -> HttpResponse {
    let code = match err {
        CreateUserCommandError::EmptyUsername
        | CreateUserCommandError::UsernameTooLong
        | CreateUserCommandError::InvalidUsername => "INVALID_USERNAME",
        CreateUserCommandError::EmptyPassword => "WEAK_PASSWORD",
        CreateUserCommandError::PasswordMismatch => "PASSWORD_MISMATCH",
    };
    ApiResponse::invalid_form(code, &err.to_string(), form)
}

fn map_registration_error(err: UserRegistrationError, form: RegisterForm) -> HttpResponse {
    match err {
        UserRegistrationError::CreateUserFailed(CreateUserError::UsernameTaken) => {
            warn!(username = %form.username, "Registration rejected: username taken");
            ApiResponse::conflict("USERNAME_TAKEN", "A user with that username already exists")
        }
        UserRegistrationError::CreateUserFailed(CreateUserError::WeakPassword(e)) => {
            ApiResponse::invalid_form("WEAK_PASSWORD", &e.to_string(), form)
        }
        UserRegistrationError::CreateUserFailed(CreateUserError::HashingFailed(e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }
        UserRegistrationError::CreateUserFailed(CreateUserError::RepositoryError(e)) => {
            error!(error = %e, "User repository failed");
            ApiResponse::internal_error()
        }
        UserRegistrationError::TokenGenerationFailed(e) => {
            error!(error = %e, "Token generation after registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates the account and logs it in: the response carries a token pair.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = inline(SuccessResponse<LoginResponse>)),
        (
            status = 400,
            description = "Invalid form input",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "PASSWORD_MISMATCH",
                    "message": "The two password fields didn't match"
                },
                "form": { "username": "ada" }
            })
        ),
        (status = 409, description = "Username taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let form = RegisterForm {
        username: dto.username.clone(),
    };

    let command = match CreateUserCommand::new(dto.username, dto.password1, dto.password2) {
        Ok(command) => command,
        Err(e) => return map_command_error(&e, form),
    };

    match data.register_user.register_user(command).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User registered");
            ApiResponse::created(LoginResponse::from(response))
        }
        Err(e) => map_registration_error(e, form),
    }
}
