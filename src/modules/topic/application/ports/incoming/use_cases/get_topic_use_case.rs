use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::domain::entities::Entry;
use crate::topic::application::domain::entities::Topic;

/// A topic with its entries, newest entry first.
#[derive(Debug, Clone)]
pub struct TopicView {
    pub topic: Topic,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: Uuid, requester: UserId) -> Result<TopicView, GetTopicError>;
}
