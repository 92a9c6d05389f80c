use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::ports::outgoing::EntryQuery;
use crate::topic::application::{
    domain::ownership_policy::visible_to,
    ports::{
        incoming::use_cases::{GetTopicError, GetTopicUseCase, TopicView},
        outgoing::TopicQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetTopicService<Q, E>
where
    Q: TopicQuery + Send + Sync,
    E: EntryQuery + Send + Sync,
{
    topics: Q,
    entries: E,
}

impl<Q, E> GetTopicService<Q, E>
where
    Q: TopicQuery + Send + Sync,
    E: EntryQuery + Send + Sync,
{
    pub fn new(topics: Q, entries: E) -> Self {
        Self { topics, entries }
    }
}

#[async_trait]
impl<Q, E> GetTopicUseCase for GetTopicService<Q, E>
where
    Q: TopicQuery + Send + Sync,
    E: EntryQuery + Send + Sync,
{
    async fn execute(&self, topic_id: Uuid, requester: UserId) -> Result<TopicView, GetTopicError> {
        let topic = self
            .topics
            .find_by_id(topic_id)
            .await
            .map_err(|e| GetTopicError::RepositoryError(e.to_string()))?;

        let topic = visible_to(topic, requester).ok_or(GetTopicError::TopicNotFound)?;

        let entries = self
            .entries
            .list_for_topic(topic.id)
            .await
            .map_err(|e| GetTopicError::RepositoryError(e.to_string()))?;

        Ok(TopicView { topic, entries })
    }
}
