use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo, LogoutRequestDto, LogoutResponseBody,
    RefreshTokenRequestDto, RefreshTokenResponseBody, RegisterForm, RegisterUserRequest,
};
use crate::entry::adapter::incoming::web::dto::{EntryEditResponse, EntryForm, EntryResponse};
use crate::topic::adapter::incoming::web::dto::{TopicDetailResponse, TopicForm, TopicResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Learning Log API",
        version = "1.0.0",
        description = "Topics you are learning about, and the notes you keep on each."
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,

        // Topics
        crate::topic::adapter::incoming::web::routes::get_topics::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::get_topic::get_topic_handler,
        crate::topic::adapter::incoming::web::routes::create_topic::create_topic_handler,

        // Entries
        crate::entry::adapter::incoming::web::routes::create_entry::create_entry_handler,
        crate::entry::adapter::incoming::web::routes::get_entry_for_edit::get_entry_for_edit_handler,
        crate::entry::adapter::incoming::web::routes::edit_entry::edit_entry_handler,

        // Admin
        crate::topic::adapter::incoming::web::routes::delete_topic::delete_topic_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            RegisterUserRequest,
            RegisterForm,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            LogoutRequestDto,
            LogoutResponseBody,
            RefreshTokenRequestDto,
            RefreshTokenResponseBody,

            TopicForm,
            TopicResponse,
            TopicDetailResponse,
            EntryForm,
            EntryResponse,
            EntryEditResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and token endpoints"),
        (name = "topics", description = "The current user's topics"),
        (name = "entries", description = "Entries under the current user's topics"),
        (name = "admin", description = "Staff-only maintenance"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
