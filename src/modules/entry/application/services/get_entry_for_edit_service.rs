use async_trait::async_trait;
use uuid::Uuid;

use super::owned_entry::load_owned_entry;
use crate::auth::application::domain::entities::UserId;
use crate::entry::application::ports::{
    incoming::use_cases::{EntryEditView, GetEntryForEditError, GetEntryForEditUseCase},
    outgoing::EntryQuery,
};
use crate::topic::application::ports::outgoing::TopicQuery;

#[derive(Debug, Clone)]
pub struct GetEntryForEditService<E, T>
where
    E: EntryQuery + Send + Sync,
    T: TopicQuery + Send + Sync,
{
    entries: E,
    topics: T,
}

impl<E, T> GetEntryForEditService<E, T>
where
    E: EntryQuery + Send + Sync,
    T: TopicQuery + Send + Sync,
{
    pub fn new(entries: E, topics: T) -> Self {
        Self { entries, topics }
    }
}

#[async_trait]
impl<E, T> GetEntryForEditUseCase for GetEntryForEditService<E, T>
where
    E: EntryQuery + Send + Sync,
    T: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        entry_id: Uuid,
        requester: UserId,
    ) -> Result<EntryEditView, GetEntryForEditError> {
        let (entry, topic) = load_owned_entry(&self.entries, &self.topics, entry_id, requester)
            .await
            .map_err(GetEntryForEditError::RepositoryError)?
            .ok_or(GetEntryForEditError::EntryNotFound)?;

        Ok(EntryEditView { entry, topic })
    }
}
