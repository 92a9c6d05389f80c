use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::Topic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetTopicsUseCase: Send + Sync {
    /// The owner's topics, oldest first. No policy check: the query is
    /// already scoped to the owner.
    async fn execute(&self, owner: UserId) -> Result<Vec<Topic>, GetTopicsError>;
}
