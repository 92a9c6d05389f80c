use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::topic::adapter::incoming::web::dto::{TopicForm, TopicResponse};
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicCommandError, CreateTopicError,
};
use crate::AppState;

const TOPICS_LOCATION: &str = "/api/topics";

/// Create a topic
///
/// On success the client is sent back to the topic list.
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "topics",
    security(("BearerAuth" = [])),
    request_body = TopicForm,
    responses(
        (status = 303, description = "Created; Location points at the topic list", body = inline(SuccessResponse<TopicResponse>)),
        (
            status = 400,
            description = "Invalid text; the submitted form is echoed back",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMPTY_TEXT", "message": "Text cannot be empty" },
                "form": { "text": "   " }
            })
        ),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/topics")]
pub async fn create_topic_handler(
    user: AuthenticatedUser,
    payload: web::Json<TopicForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = payload.into_inner();

    let command = match CreateTopicCommand::new(user.user_id, form.text.clone()) {
        Ok(command) => command,
        Err(err) => return map_command_error(err, form),
    };

    match data.create_topic_use_case.execute(command).await {
        Ok(topic) => ApiResponse::see_other(TOPICS_LOCATION, TopicResponse::from(topic)),
        Err(err) => map_create_topic_error(err),
    }
}

fn map_command_error(err: CreateTopicCommandError, form: TopicForm) -> HttpResponse {
    let code = match err {
        CreateTopicCommandError::EmptyText => "EMPTY_TEXT",
        CreateTopicCommandError::TextTooLong => "TEXT_TOO_LONG",
    };
    ApiResponse::invalid_form(code, &err.to_string(), form)
}

fn map_create_topic_error(err: CreateTopicError) -> HttpResponse {
    match err {
        CreateTopicError::RepositoryError(e) => {
            error!(error = %e, "Creating topic failed");
            ApiResponse::internal_error()
        }
    }
}
