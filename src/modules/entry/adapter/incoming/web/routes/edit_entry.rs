use actix_web::{put, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::entry::adapter::incoming::web::dto::{EntryForm, EntryResponse};
use crate::entry::application::domain::entities::EntryTextError;
use crate::entry::application::ports::incoming::use_cases::{EditEntryError, EditEntryRequest};
use crate::shared::api::ApiResponse;
use crate::topic::adapter::incoming::web::dto::topic_location;
use crate::AppState;

/// Save an edited entry
///
/// Only the text changes. The client is sent back to the entry's topic.
#[utoipa::path(
    put,
    path = "/api/entries/{entry_id}",
    tag = "entries",
    security(("BearerAuth" = [])),
    params(("entry_id" = Uuid, Path, description = "Entry id")),
    request_body = EntryForm,
    responses(
        (status = 303, description = "Updated; Location points at the topic", body = inline(SuccessResponse<EntryResponse>)),
        (status = 400, description = "Empty text; the submitted form is echoed back", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/entries/{entry_id}")]
pub async fn edit_entry_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<EntryForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry_id = path.into_inner();
    let form = payload.into_inner();

    let request = EditEntryRequest {
        entry_id,
        requester: user.user_id,
        text: form.text.clone(),
    };

    match data.edit_entry_use_case.execute(request).await {
        Ok(entry) => {
            ApiResponse::see_other(&topic_location(entry.topic_id), EntryResponse::from(entry))
        }
        Err(err) => map_edit_entry_error(err, form),
    }
}

fn map_edit_entry_error(err: EditEntryError, form: EntryForm) -> HttpResponse {
    match err {
        EditEntryError::EntryNotFound => {
            ApiResponse::not_found("ENTRY_NOT_FOUND", "Entry not found")
        }
        EditEntryError::InvalidText(e @ EntryTextError::EmptyText) => {
            ApiResponse::invalid_form("EMPTY_TEXT", &e.to_string(), form)
        }
        EditEntryError::RepositoryError(e) => {
            error!(error = %e, "Updating entry failed");
            ApiResponse::internal_error()
        }
    }
}
