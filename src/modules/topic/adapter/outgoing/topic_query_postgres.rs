use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::{
    domain::entities::Topic,
    ports::outgoing::{TopicQuery, TopicQueryError},
};

use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn get_topics(&self, owner: UserId) -> Result<Vec<Topic>, TopicQueryError> {
        let models: Vec<TopicModel> = TopicEntity::find()
            .filter(TopicColumn::UserId.eq(owner.value()))
            .order_by_asc(TopicColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(TopicModel::to_domain).collect())
    }

    async fn find_by_id(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError> {
        let model = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(model.as_ref().map(TopicModel::to_domain))
    }
}
