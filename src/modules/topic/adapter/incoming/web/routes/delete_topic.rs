use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::StaffUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::DeleteTopicError;
use crate::AppState;

/// Delete a topic and all of its entries (staff only)
#[utoipa::path(
    delete,
    path = "/api/admin/topics/{topic_id}",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("topic_id" = Uuid, Path, description = "Topic id")),
    responses(
        (status = 204, description = "Topic and its entries deleted"),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/admin/topics/{topic_id}")]
pub async fn delete_topic_handler(
    staff: StaffUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.delete_topic_use_case.execute(topic_id).await {
        Ok(()) => {
            info!(staff_id = %staff.user_id, topic_id = %topic_id, "Topic and its entries deleted by staff");
            ApiResponse::no_content()
        }
        Err(err) => map_delete_topic_error(err),
    }
}

fn map_delete_topic_error(err: DeleteTopicError) -> HttpResponse {
    match err {
        DeleteTopicError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        DeleteTopicError::RepositoryError(e) => {
            error!(error = %e, "Deleting topic failed");
            ApiResponse::internal_error()
        }
    }
}
