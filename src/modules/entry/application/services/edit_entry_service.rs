use async_trait::async_trait;
use tracing::info;

use super::owned_entry::load_owned_entry;
use crate::entry::application::{
    domain::entities::{Entry, EntryText},
    ports::{
        incoming::use_cases::{EditEntryError, EditEntryRequest, EditEntryUseCase},
        outgoing::{EntryQuery, EntryRepository, EntryRepositoryError},
    },
};
use crate::topic::application::ports::outgoing::TopicQuery;

#[derive(Debug, Clone)]
pub struct EditEntryService<E, T, R>
where
    E: EntryQuery + Send + Sync,
    T: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    entries: E,
    topics: T,
    repository: R,
}

impl<E, T, R> EditEntryService<E, T, R>
where
    E: EntryQuery + Send + Sync,
    T: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    pub fn new(entries: E, topics: T, repository: R) -> Self {
        Self {
            entries,
            topics,
            repository,
        }
    }
}

#[async_trait]
impl<E, T, R> EditEntryUseCase for EditEntryService<E, T, R>
where
    E: EntryQuery + Send + Sync,
    T: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    async fn execute(&self, request: EditEntryRequest) -> Result<Entry, EditEntryError> {
        let (entry, _topic) = load_owned_entry(
            &self.entries,
            &self.topics,
            request.entry_id,
            request.requester,
        )
        .await
        .map_err(EditEntryError::RepositoryError)?
        .ok_or(EditEntryError::EntryNotFound)?;

        let text = EntryText::parse(&request.text).map_err(EditEntryError::InvalidText)?;

        let updated = self
            .repository
            .update_text(entry.id, text)
            .await
            .map_err(|e| match e {
                // Deleted between the read and the write
                EntryRepositoryError::EntryNotFound => EditEntryError::EntryNotFound,
                other => EditEntryError::RepositoryError(other.to_string()),
            })?;

        info!(entry_id = %updated.id, topic_id = %updated.topic_id, "Entry edited");
        Ok(updated)
    }
}
