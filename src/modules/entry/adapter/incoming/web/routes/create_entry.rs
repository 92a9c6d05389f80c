use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::entry::adapter::incoming::web::dto::{EntryForm, EntryResponse};
use crate::entry::application::domain::entities::EntryTextError;
use crate::entry::application::ports::incoming::use_cases::{CreateEntryError, CreateEntryRequest};
use crate::shared::api::ApiResponse;
use crate::topic::adapter::incoming::web::dto::topic_location;
use crate::AppState;

/// Add an entry to one of my topics
#[utoipa::path(
    post,
    path = "/api/topics/{topic_id}/entries",
    tag = "entries",
    security(("BearerAuth" = [])),
    params(("topic_id" = Uuid, Path, description = "Topic the entry belongs to")),
    request_body = EntryForm,
    responses(
        (status = 303, description = "Created; Location points at the topic", body = inline(SuccessResponse<EntryResponse>)),
        (
            status = 400,
            description = "Empty text; the submitted form is echoed back",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMPTY_TEXT", "message": "Text cannot be empty" },
                "form": { "text": "" }
            })
        ),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/topics/{topic_id}/entries")]
pub async fn create_entry_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<EntryForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();
    let form = payload.into_inner();

    let request = CreateEntryRequest {
        topic_id,
        requester: user.user_id,
        text: form.text.clone(),
    };

    match data.create_entry_use_case.execute(request).await {
        Ok(entry) => ApiResponse::see_other(&topic_location(topic_id), EntryResponse::from(entry)),
        Err(err) => map_create_entry_error(err, form),
    }
}

fn map_create_entry_error(err: CreateEntryError, form: EntryForm) -> HttpResponse {
    match err {
        CreateEntryError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        CreateEntryError::InvalidText(e @ EntryTextError::EmptyText) => {
            ApiResponse::invalid_form("EMPTY_TEXT", &e.to_string(), form)
        }
        CreateEntryError::RepositoryError(e) => {
            error!(error = %e, "Creating entry failed");
            ApiResponse::internal_error()
        }
    }
}
