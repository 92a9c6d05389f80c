use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::topic::adapter::incoming::web::dto::TopicDetailResponse;
use crate::topic::application::ports::incoming::use_cases::GetTopicError;
use crate::AppState;

/// View a topic with its entries
///
/// A topic owned by someone else answers exactly like a missing one.
#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    security(("BearerAuth" = [])),
    params(("topic_id" = Uuid, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Topic and its entries, newest first", body = inline(SuccessResponse<TopicDetailResponse>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (
            status = 404,
            description = "Topic not found",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "TOPIC_NOT_FOUND", "message": "Topic not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/topics/{topic_id}")]
pub async fn get_topic_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.get_topic_use_case.execute(topic_id, user.user_id).await {
        Ok(view) => ApiResponse::success(TopicDetailResponse::from(view)),
        Err(err) => map_get_topic_error(err),
    }
}

fn map_get_topic_error(err: GetTopicError) -> HttpResponse {
    match err {
        GetTopicError::TopicNotFound => ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found"),
        GetTopicError::RepositoryError(e) => {
            error!(error = %e, "Loading topic failed");
            ApiResponse::internal_error()
        }
    }
}
