use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::domain::entities::Entry;
use crate::topic::application::domain::entities::Topic;

/// What the edit form is pre-filled from.
#[derive(Debug, Clone)]
pub struct EntryEditView {
    pub entry: Entry,
    pub topic: Topic,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetEntryForEditError {
    #[error("Entry not found")]
    EntryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetEntryForEditUseCase: Send + Sync {
    async fn execute(
        &self,
        entry_id: Uuid,
        requester: UserId,
    ) -> Result<EntryEditView, GetEntryForEditError>;
}
