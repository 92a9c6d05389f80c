use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::domain::entities::{Entry, EntryTextError};

#[derive(Debug, Clone)]
pub struct EditEntryRequest {
    pub entry_id: Uuid,
    pub requester: UserId,
    pub text: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditEntryError {
    #[error("Entry not found")]
    EntryNotFound,

    #[error("{0}")]
    InvalidText(EntryTextError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EditEntryUseCase: Send + Sync {
    async fn execute(&self, request: EditEntryRequest) -> Result<Entry, EditEntryError>;
}
