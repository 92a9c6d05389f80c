use async_trait::async_trait;
use tracing::info;

use crate::entry::application::{
    domain::entities::{Entry, EntryText},
    ports::{
        incoming::use_cases::{CreateEntryError, CreateEntryRequest, CreateEntryUseCase},
        outgoing::{CreateEntryData, EntryRepository},
    },
};
use crate::topic::application::{
    domain::ownership_policy::visible_to, ports::outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct CreateEntryService<T, R>
where
    T: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    topics: T,
    repository: R,
}

impl<T, R> CreateEntryService<T, R>
where
    T: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    pub fn new(topics: T, repository: R) -> Self {
        Self { topics, repository }
    }
}

#[async_trait]
impl<T, R> CreateEntryUseCase for CreateEntryService<T, R>
where
    T: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    async fn execute(&self, request: CreateEntryRequest) -> Result<Entry, CreateEntryError> {
        let topic = self
            .topics
            .find_by_id(request.topic_id)
            .await
            .map_err(|e| CreateEntryError::RepositoryError(e.to_string()))?;

        // Ownership before validation
        let topic = visible_to(topic, request.requester).ok_or(CreateEntryError::TopicNotFound)?;

        let text = EntryText::parse(&request.text).map_err(CreateEntryError::InvalidText)?;

        let entry = self
            .repository
            .create_entry(CreateEntryData {
                topic_id: topic.id,
                text,
            })
            .await
            .map_err(|e| CreateEntryError::RepositoryError(e.to_string()))?;

        info!(entry_id = %entry.id, topic_id = %topic.id, "Entry created");
        Ok(entry)
    }
}
