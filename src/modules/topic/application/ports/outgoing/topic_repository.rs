use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::Topic;

#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub owner: UserId,
    pub text: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError>;

    /// Removes the topic and all of its entries in one transaction.
    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
}
