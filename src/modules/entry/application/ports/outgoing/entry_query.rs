use async_trait::async_trait;
use uuid::Uuid;

use crate::entry::application::domain::entities::Entry;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EntryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EntryQuery: Send + Sync {
    async fn find_by_id(&self, entry_id: Uuid) -> Result<Option<Entry>, EntryQueryError>;

    /// Entries of one topic, newest first.
    async fn list_for_topic(&self, topic_id: Uuid) -> Result<Vec<Entry>, EntryQueryError>;
}
