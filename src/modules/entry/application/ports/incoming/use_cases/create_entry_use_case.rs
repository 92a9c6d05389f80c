use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::domain::entities::{Entry, EntryTextError};

/// Raw input: the text is validated only after the topic passed the
/// ownership check.
#[derive(Debug, Clone)]
pub struct CreateEntryRequest {
    pub topic_id: Uuid,
    pub requester: UserId,
    pub text: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateEntryError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("{0}")]
    InvalidText(EntryTextError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateEntryUseCase: Send + Sync {
    async fn execute(&self, request: CreateEntryRequest) -> Result<Entry, CreateEntryError>;
}
