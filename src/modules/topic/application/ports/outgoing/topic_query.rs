use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::Topic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// The owner's topics, oldest first.
    async fn get_topics(&self, owner: UserId) -> Result<Vec<Topic>, TopicQueryError>;

    /// Unfiltered lookup; callers apply the ownership policy.
    async fn find_by_id(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError>;
}
