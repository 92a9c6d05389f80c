use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::entry::adapter::outgoing::sea_orm_entity::{
    Column as EntryColumn, Entity as EntryEntity,
};
use crate::topic::application::{
    domain::entities::Topic,
    ports::outgoing::{CreateTopicData, TopicRepository, TopicRepositoryError},
};

use super::sea_orm_entity::{
    ActiveModel as TopicActiveModel, Entity as TopicEntity, Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> TopicRepositoryError {
    TopicRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            text: Set(data.text),
            created_at: Set(Utc::now().into()),
        };

        let inserted: TopicModel = active.insert(&*self.db).await.map_err(db_error)?;

        Ok(inserted.to_domain())
    }

    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        EntryEntity::delete_many()
            .filter(EntryColumn::TopicId.eq(topic_id))
            .exec(&txn)
            .await
            .map_err(db_error)?;

        let result = TopicEntity::delete_by_id(topic_id)
            .exec(&txn)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            txn.rollback().await.map_err(db_error)?;
            return Err(TopicRepositoryError::TopicNotFound);
        }

        txn.commit().await.map_err(db_error)?;
        Ok(())
    }
}
