use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::entry::adapter::incoming::web::dto::EntryEditResponse;
use crate::entry::application::ports::incoming::use_cases::GetEntryForEditError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Load an entry into the edit form
#[utoipa::path(
    get,
    path = "/api/entries/{entry_id}/edit",
    tag = "entries",
    security(("BearerAuth" = [])),
    params(("entry_id" = Uuid, Path, description = "Entry id")),
    responses(
        (status = 200, description = "Entry, its topic, and the pre-filled form", body = inline(SuccessResponse<EntryEditResponse>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/entries/{entry_id}/edit")]
pub async fn get_entry_for_edit_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry_id = path.into_inner();

    match data
        .get_entry_for_edit_use_case
        .execute(entry_id, user.user_id)
        .await
    {
        Ok(view) => ApiResponse::success(EntryEditResponse::from(view)),
        Err(err) => map_get_entry_error(err),
    }
}

fn map_get_entry_error(err: GetEntryForEditError) -> HttpResponse {
    match err {
        GetEntryForEditError::EntryNotFound => {
            ApiResponse::not_found("ENTRY_NOT_FOUND", "Entry not found")
        }
        GetEntryForEditError::RepositoryError(e) => {
            error!(error = %e, "Loading entry failed");
            ApiResponse::internal_error()
        }
    }
}
