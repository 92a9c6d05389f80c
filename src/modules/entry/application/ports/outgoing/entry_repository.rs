use async_trait::async_trait;
use uuid::Uuid;

use crate::entry::application::domain::entities::{Entry, EntryText};

#[derive(Debug, Clone)]
pub struct CreateEntryData {
    pub topic_id: Uuid,
    pub text: EntryText,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EntryRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Entry not found")]
    EntryNotFound,
}

#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn create_entry(&self, data: CreateEntryData) -> Result<Entry, EntryRepositoryError>;

    /// Rewrites `text` only; id, topic and creation time stay as they are.
    async fn update_text(
        &self,
        entry_id: Uuid,
        text: EntryText,
    ) -> Result<Entry, EntryRepositoryError>;
}
