use actix_web::{get, web, HttpResponse, Responder};
use tracing::{debug, error};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::topic::adapter::incoming::web::dto::TopicResponse;
use crate::topic::application::ports::incoming::use_cases::GetTopicsError;
use crate::AppState;

/// List my topics
///
/// Only the caller's own topics, oldest first.
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Topics of the current user", body = inline(SuccessResponse<Vec<TopicResponse>>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/topics")]
pub async fn get_topics_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_topics_use_case.execute(user.user_id).await {
        Ok(topics) => {
            debug!(user_id = %user.user_id, count = topics.len(), "Listed topics");
            let response = topics
                .into_iter()
                .map(TopicResponse::from)
                .collect::<Vec<_>>();

            ApiResponse::success(response)
        }

        Err(err) => map_get_topics_error(err),
    }
}

fn map_get_topics_error(err: GetTopicsError) -> HttpResponse {
    match err {
        GetTopicsError::RepositoryError(e) => {
            error!(error = %e, "Listing topics failed");
            ApiResponse::internal_error()
        }
    }
}
