use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entry::adapter::incoming::web::dto::EntryResponse;
use crate::topic::application::{
    domain::entities::Topic, ports::incoming::use_cases::TopicView,
};

/// Body of `POST /api/topics`, echoed back unchanged when it fails
/// validation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopicForm {
    #[schema(example = "Chess")]
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicResponse {
    pub id: Uuid,

    #[schema(example = "Chess")]
    pub text: String,

    pub created_at: DateTime<Utc>,
}

impl From<Topic> for TopicResponse {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id,
            text: topic.text,
            created_at: topic.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicDetailResponse {
    pub topic: TopicResponse,

    /// Newest first
    pub entries: Vec<EntryResponse>,
}

impl From<TopicView> for TopicDetailResponse {
    fn from(view: TopicView) -> Self {
        Self {
            topic: view.topic.into(),
            entries: view.entries.into_iter().map(EntryResponse::from).collect(),
        }
    }
}

pub fn topic_location(topic_id: Uuid) -> String {
    format!("/api/topics/{topic_id}")
}
