use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entry::application::{
    domain::entities::Entry, ports::incoming::use_cases::EntryEditView,
};
use crate::topic::adapter::incoming::web::dto::TopicResponse;

/// Body for creating or editing an entry. Echoed back as submitted when
/// validation fails.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntryForm {
    #[schema(example = "Learned the Sicilian defence today.")]
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EntryResponse {
    pub id: Uuid,

    pub topic_id: Uuid,

    pub text: String,

    /// First 50 characters, `...` appended when cut
    #[schema(example = "Learned the Sicilian defence today.")]
    pub preview: String,

    pub created_at: DateTime<Utc>,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            preview: entry.preview(),
            id: entry.id,
            topic_id: entry.topic_id,
            text: entry.text,
            created_at: entry.created_at,
        }
    }
}

/// What the edit form is pre-filled with.
#[derive(Debug, Serialize, ToSchema)]
pub struct EntryEditResponse {
    pub entry: EntryResponse,
    pub topic: TopicResponse,
    pub form: EntryForm,
}

impl From<EntryEditView> for EntryEditResponse {
    fn from(view: EntryEditView) -> Self {
        Self {
            form: EntryForm {
                text: view.entry.text.clone(),
            },
            entry: view.entry.into(),
            topic: view.topic.into(),
        }
    }
}
